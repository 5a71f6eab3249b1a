//! The three output modes: concatenation, line mode and template mode.
//!
//! Rendering targets any [`core::fmt::Write`]; the console hands it an `ArrayString`.

use core::fmt::Write;

use crate::operand::{DataType, Operand};
use crate::token::{tokenize, Token, MissingOperand, ExtraOperand, WrongType};

pub const ERR_OVERFLOW: &str = "rendered text doesn't fit in the message buffer";

fn write_operand<W: Write>(out: &mut W, operand: &Operand) -> Result<(), &'static str> {
    write!(out, "{}", operand).map_err(|_| ERR_OVERFLOW)
}

fn write_text<W: Write>(out: &mut W, text: &str) -> Result<(), &'static str> {
    out.write_str(text).map_err(|_| ERR_OVERFLOW)
}

/// Operands back to back. A space goes between two operands only when neither is a string.
pub fn write_print<W: Write>(out: &mut W, operands: &[Operand]) -> Result<(), &'static str> {
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 && !operand.is_str() && !operands[i - 1].is_str() {
            write_text(out, " ")?;
        }
        write_operand(out, operand)?;
    }
    Ok(())
}

/// Operands separated by single spaces, then a line break.
pub fn write_println<W: Write>(out: &mut W, operands: &[Operand]) -> Result<(), &'static str> {
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            write_text(out, " ")?;
        }
        write_operand(out, operand)?;
    }
    write_text(out, "\n")
}

fn check_type(operand: &Operand, expected: DataType) -> Result<(), &'static str> {
    if operand.data_type() != expected {
        return Err(WrongType.static_display());
    }
    Ok(())
}

/// Substitutes operands into the placeholders of `template` in order. Nothing is appended
/// after the template, so a line break must be part of it.
pub fn write_printf<W: Write>(out: &mut W, template: &str, operands: &[Operand])
-> Result<(), &'static str> {
    let mut tok = tokenize(template);
    let mut operands = operands.iter();

    loop {
        match tok.next() {
            Token::Done => break,
            Token::Text(text) => write_text(out, text)?,
            Token::Percent => write_text(out, "%")?,
            Token::Verb(verb) => {
                let operand = operands.next().ok_or(MissingOperand.static_display())?;
                match verb {
                    b'd' => check_type(operand, DataType::Int)?,
                    b's' => check_type(operand, DataType::Str)?,
                    _ => {}
                }
                write_operand(out, operand)?;
            }
            Token::Err(error) => return Err(error.static_display()),
        }
    }

    if operands.next().is_some() {
        return Err(ExtraOperand.static_display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{UnknownVerb, NoVerb};
    use arrayvec::ArrayString;

    fn print(operands: &[Operand]) -> ArrayString<64> {
        let mut s = ArrayString::new();
        write_print(&mut s, operands).unwrap();
        s
    }

    fn println(operands: &[Operand]) -> ArrayString<64> {
        let mut s = ArrayString::new();
        write_println(&mut s, operands).unwrap();
        s
    }

    fn printf(template: &str, operands: &[Operand]) -> Result<ArrayString<64>, &'static str> {
        let mut s = ArrayString::new();
        write_printf(&mut s, template, operands)?;
        Ok(s)
    }

    #[test]
    fn print_single_values() {
        assert_eq!(print(&[Operand::Int(10)]).as_str(), "10");
        assert_eq!(print(&[]).as_str(), "");
    }

    #[test]
    fn print_spacing() {
        assert_eq!(print(&[Operand::Int(10), Operand::Int(20)]).as_str(), "10 20");
        assert_eq!(print(&[Operand::Str("a = "), Operand::Int(10)]).as_str(), "a = 10");
        assert_eq!(print(&[Operand::Int(10), Operand::Str("x"), Operand::Int(20)]).as_str(), "10x20");
        assert_eq!(print(&[Operand::Str("a"), Operand::Str("b")]).as_str(), "ab");
    }

    #[test]
    fn consecutive_prints_concatenate() {
        let mut s = ArrayString::<16>::new();
        write_print(&mut s, &[Operand::Int(10)]).unwrap();
        write_print(&mut s, &[Operand::Int(20)]).unwrap();
        assert_eq!(s.as_str(), "1020");
    }

    #[test]
    fn println_spacing() {
        assert_eq!(println(&[Operand::Str("a = "), Operand::Int(10)]).as_str(), "a =  10\n");
        assert_eq!(println(&[Operand::Int(100), Operand::Int(260)]).as_str(), "100 260\n");
        assert_eq!(println(&[Operand::Str("Hello Go")]).as_str(), "Hello Go\n");
        assert_eq!(println(&[]).as_str(), "\n");
    }

    #[test]
    fn println_labelled_pair() {
        let operands = [Operand::Str("a = "), Operand::Int(20), Operand::Str("b = "), Operand::Int(10)];
        assert_eq!(println(&operands).as_str(), "a =  20 b =  10\n");
    }

    #[test]
    fn printf_decimal() {
        assert_eq!(printf("a = %d\n", &[Operand::Int(10)]).unwrap().as_str(), "a = 10\n");
        assert_eq!(printf("b = %d", &[Operand::Int(20)]).unwrap().as_str(), "b = 20");
        assert_eq!(printf("%d", &[Operand::Int(-5)]).unwrap().as_str(), "-5");
    }

    #[test]
    fn printf_other_verbs() {
        let out = printf("%s=%v, %v%%", &[Operand::Str("hp"), Operand::Int(100), Operand::Str("mp")]).unwrap();
        assert_eq!(out.as_str(), "hp=100, mp%");
    }

    #[test]
    fn printf_errors() {
        assert_eq!(printf("%d", &[Operand::Str("x")]), Err(WrongType.static_display()));
        assert_eq!(printf("%s", &[Operand::Int(1)]), Err(WrongType.static_display()));
        assert_eq!(printf("%d %d", &[Operand::Int(1)]), Err(MissingOperand.static_display()));
        assert_eq!(printf("%d", &[Operand::Int(1), Operand::Int(2)]), Err(ExtraOperand.static_display()));
        assert_eq!(printf("%x", &[Operand::Int(1)]), Err(UnknownVerb.static_display()));
        assert_eq!(printf("a %", &[]), Err(NoVerb.static_display()));
    }

    #[test]
    fn overflow() {
        let mut s = ArrayString::<4>::new();
        assert_eq!(write_println(&mut s, &[Operand::Str("a = "), Operand::Int(10)]), Err(ERR_OVERFLOW));
    }
}
