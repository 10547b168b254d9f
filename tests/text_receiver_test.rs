use std::io::{self, Write};

use deferred::{ReceiverError, TextCommandQueue, TextOperation, TextReceiver};

struct LimitedSink {
    written: Vec<u8>,
    limit: usize,
}

impl LimitedSink {
    fn new(limit: usize) -> Self {
        Self {
            written: Vec::new(),
            limit,
        }
    }
}

impl Write for LimitedSink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.written.len() + data.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "sink is full"));
        }

        self.written.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn operations_and_method_paths_produce_the_same_report() {
    let mut by_method = TextCommandQueue::new();
    by_method.push(TextReceiver::exec_long, (1,));
    by_method.push(TextReceiver::exec_string, ("two".to_string(),));
    by_method.push(TextReceiver::exec_literal, ("three",));
    by_method.push(
        TextReceiver::exec_multiple,
        (4, "five".to_string(), Box::<str>::from("six"), "seven"),
    );

    let mut by_operation = TextCommandQueue::new();
    by_operation.push_command(TextOperation::Long(1));
    by_operation.push_command(TextOperation::String("two".to_string()));
    by_operation.push_command(TextOperation::Literal("three"));
    by_operation.push_command(TextOperation::Multiple {
        number: 4,
        text: "five".to_string(),
        owned_text: Box::from("six"),
        literal: "seven",
    });

    let mut method_receiver = TextReceiver::new(Vec::new());
    let mut operation_receiver = TextReceiver::new(Vec::new());

    assert_eq!(by_method.try_execute_all(&mut method_receiver).unwrap(), 4);
    assert_eq!(
        by_operation.try_execute_all(&mut operation_receiver).unwrap(),
        4
    );

    assert_eq!(method_receiver.get_ref(), operation_receiver.get_ref());
}

#[test]
fn receiver_failure_reaches_the_consumer() {
    let first_report = "long value '1'\n";

    let mut queue = TextCommandQueue::new();
    queue.push_command(TextOperation::Long(1));
    queue.push_command(TextOperation::Long(2));
    queue.push_command(TextOperation::Long(3));

    let mut receiver = TextReceiver::new(LimitedSink::new(first_report.len()));

    let error = queue.try_execute_all(&mut receiver).unwrap_err();

    assert!(matches!(
        error,
        ReceiverError::Write(ref source) if source.kind() == io::ErrorKind::WriteZero
    ));
    assert_eq!(receiver.invocation_count(), 2);
    assert_eq!(queue.len(), 1);
    assert_eq!(receiver.get_ref().written, first_report.as_bytes());
}

#[test]
fn handle_passes_receiver_error_through() {
    let mut queue = TextCommandQueue::new();
    queue.push(TextReceiver::exec_literal, ("too long",));

    let mut receiver = TextReceiver::new(LimitedSink::new(0));

    let result = queue.pop().execute(&mut receiver);

    assert!(matches!(result, Some(Err(ReceiverError::Write(_)))));
}

#[test]
fn failing_sink_stops_the_drain_at_the_first_error() {
    let mut queue = TextCommandQueue::new();
    queue.push_command(TextOperation::Long(1));
    queue.push_command(TextOperation::Long(2));
    queue.push_command(TextOperation::Long(3));

    let mut receiver = TextReceiver::new(LimitedSink::new(0));

    let result = queue.try_execute_all(&mut receiver);

    assert!(matches!(result, Err(ReceiverError::Write(_))));
    assert_eq!(receiver.invocation_count(), 1);
    assert_eq!(queue.len(), 2);
    assert!(receiver.get_ref().written.is_empty());
}
