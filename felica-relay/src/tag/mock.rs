// felica-relay/src/tag/mock.rs

use super::Transceiver;
use crate::{Error, Result};

/// Mock transceiver for tests: records frames and replays queued replies.
#[derive(Debug, Default)]
pub struct MockTransceiver {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
}

impl MockTransceiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }
}

impl Transceiver for MockTransceiver {
    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        self.sent.push(frame.to_vec());
        if self.responses.is_empty() {
            Err(Error::transport("tag lost"))
        } else {
            Ok(self.responses.remove(0))
        }
    }
}
