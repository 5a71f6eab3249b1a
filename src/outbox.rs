/// Records are `u16be(len) tag text`, where `len` counts the tag byte and the text.
/// A length of 0 marks the end of the records.
pub const TAG_PRINT: u8 = 1;
pub const TAG_PRINTLN: u8 = 2;
pub const TAG_PRINTF: u8 = 3;

pub struct OutboxMessages<'a> {
    outbox: &'a [u8],
}

impl<'a> Iterator for OutboxMessages<'a> {
    type Item = (u8, &'a [u8]);

    fn next(&mut self) -> Option<(u8, &'a [u8])> {
        if self.outbox.len() < 2 {
            return None;
        }

        let length = u16::from_be_bytes([self.outbox[0], self.outbox[1]]) as usize;
        if length == 0 {
            return None;
        }
        debug_assert!(self.outbox.len() >= length + 2);

        let end = length + 2;
        let tag = self.outbox[2];
        let text = &self.outbox[3..end];
        self.outbox = &self.outbox[end..];

        Some((tag, text))
    }
}

pub fn read_outbox(bytes: &[u8]) -> OutboxMessages {
    OutboxMessages {outbox: bytes}
}

/// Returns the number of bytes written to `dest`.
pub fn write_outbox_message_tagged(dest: &mut [u8], tag: u8, message: &[u8])
-> Result<usize, &'static str> {
    if message.len() >= u16::MAX as usize {
        return Err("message length is too long");
    }
    if dest.len() < message.len() + 3 {
        return Err("not enough room in outbox for message");
    }
    let len_bytes = (1 + message.len() as u16).to_be_bytes();
    dest[0..2].copy_from_slice(&len_bytes);
    dest[2] = tag;
    dest[3..message.len() + 3].copy_from_slice(message);
    Ok(message.len() + 3)
}

/// A caller-provided buffer filled with tagged records from the front.
pub struct Outbox<'a> {
    bytes: &'a mut [u8],
    used: usize,
}

impl<'a> Outbox<'a> {
    pub fn new(bytes: &'a mut [u8]) -> Outbox<'a> {
        let mut outbox = Outbox {bytes, used: 0};
        outbox.clear();
        outbox
    }

    pub fn write(&mut self, tag: u8, message: &[u8]) -> Result<(), &'static str> {
        let written = write_outbox_message_tagged(&mut self.bytes[self.used..], tag, message)?;
        self.used += written;
        self.terminate();
        Ok(())
    }

    pub fn messages(&self) -> OutboxMessages {
        read_outbox(&self.bytes[..self.used])
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn clear(&mut self) {
        self.used = 0;
        self.terminate();
    }

    fn terminate(&mut self) {
        if let Some(sentinel) = self.bytes.get_mut(self.used..self.used + 2) {
            sentinel.copy_from_slice(&[0, 0]);
        }
    }
}
