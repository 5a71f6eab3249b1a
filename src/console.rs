use arrayvec::ArrayString;
use log::trace;

use crate::format::{write_print, write_println, write_printf};
use crate::operand::Operand;
use crate::outbox::{Outbox, OutboxMessages, TAG_PRINT, TAG_PRINTLN, TAG_PRINTF};

/// Longest text a single console call can produce.
pub const MESSAGE_CAPACITY: usize = 256;

type Message = ArrayString<MESSAGE_CAPACITY>;

/// Renders each call into one outbox record. The host decides where the text ends up.
pub struct Console<'a> {
    outbox: Outbox<'a>,
}

impl<'a> Console<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Console<'a> {
        Console {outbox: Outbox::new(buffer)}
    }

    fn send(&mut self, tag: u8, message: &Message) -> Result<(), &'static str> {
        trace!("console record tag={} text={:?}", tag, message.as_str());
        self.outbox.write(tag, message.as_bytes())
    }

    /// Concatenation mode, no trailing line break.
    pub fn print(&mut self, operands: &[Operand]) -> Result<(), &'static str> {
        let mut message = Message::new();
        write_print(&mut message, operands)?;
        self.send(TAG_PRINT, &message)
    }

    /// Line mode.
    pub fn println(&mut self, operands: &[Operand]) -> Result<(), &'static str> {
        let mut message = Message::new();
        write_println(&mut message, operands)?;
        self.send(TAG_PRINTLN, &message)
    }

    /// Template mode.
    pub fn printf(&mut self, template: &str, operands: &[Operand]) -> Result<(), &'static str> {
        let mut message = Message::new();
        write_printf(&mut message, template, operands)?;
        self.send(TAG_PRINTF, &message)
    }

    pub fn messages(&self) -> OutboxMessages {
        self.outbox.messages()
    }

    /// Everything written so far, as the reader of stdout would see it.
    pub fn transcript<const CAP: usize>(&self) -> Result<ArrayString<CAP>, &'static str> {
        let mut text = ArrayString::new();
        for (_tag, bytes) in self.messages() {
            let part = core::str::from_utf8(bytes).map_err(|_| "console record is not UTF-8")?;
            text.try_push_str(part).map_err(|_| "transcript doesn't fit")?;
        }
        Ok(text)
    }

    pub fn clear(&mut self) {
        self.outbox.clear();
    }
}
