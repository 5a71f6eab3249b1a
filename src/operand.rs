use core::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DataType {
    Int,
    Str,
}

/// A value handed to one of the console's output modes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operand<'a> {
    Int(i32),
    Str(&'a str),
}

impl<'a> Operand<'a> {
    pub fn data_type(&self) -> DataType {
        match self {
            Operand::Int(_) => DataType::Int,
            Operand::Str(_) => DataType::Str,
        }
    }

    pub fn is_str(&self) -> bool {
        self.data_type() == DataType::Str
    }
}

impl<'a> From<i32> for Operand<'a> {
    fn from(value: i32) -> Operand<'a> {
        Operand::Int(value)
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(value: &'a str) -> Operand<'a> {
        Operand::Str(value)
    }
}

impl<'a> Display for Operand<'a> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Operand::Int(value) => write!(f, "{}", value),
            Operand::Str(text) => f.write_str(text),
        }
    }
}
