use deferred::{ReceiverError, TextCommandQueue, TextReceiver};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ReceiverError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut receiver = TextReceiver::new(std::io::stdout());
    let mut queue = TextCommandQueue::new();

    queue.push(TextReceiver::exec_long, (39,));
    queue.push(
        TextReceiver::exec_string,
        ("main_function_pointers".to_string(),),
    );
    queue.push(TextReceiver::exec_literal, ("main_function_pointers",));
    queue.push(
        TextReceiver::exec_multiple,
        (
            39,
            "main_function_pointers_string".to_string(),
            Box::<str>::from("main_function_pointers_owned"),
            "main_function_pointers_literal",
        ),
    );

    tracing::info!(pending = queue.len(), "queued commands");

    loop {
        let handle = queue.pop();
        if handle.is_empty() {
            break;
        }

        if let Some(result) = handle.execute(&mut receiver) {
            result?;
        }
    }

    tracing::info!(
        invocations = receiver.invocation_count(),
        "executed all commands"
    );

    Ok(())
}
