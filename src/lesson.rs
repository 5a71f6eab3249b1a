//! The snippets themselves. Each one declares a few integers, maybe swaps them, and prints
//! them through the console.

use log::debug;

use crate::console::Console;
use crate::operand::Operand;
use crate::swap;

pub type Lesson = fn(&mut Console) -> Result<(), &'static str>;
pub type LessonNames = &'static [&'static str];
pub type Lessons = &'static [Lesson];

pub const LESSON_NAMES: LessonNames = &[
    "comments",
    "zero_value",
    "declare_then_assign",
    "declare_many",
    "discard",
    "swap_temp",
    "swap_simultaneous",
    "print_modes",
];

pub const LESSONS: Lessons = &[
    comments,
    zero_value,
    declare_then_assign,
    declare_many,
    discard,
    swap_temp,
    swap_simultaneous,
    print_modes,
];

pub fn comments(console: &mut Console) -> Result<(), &'static str> {
    // a line comment runs to the end of the line
    console.println(&[Operand::Str("Hello Go")]) // and can follow code

    /*
    a block comment
    can span lines
    */
}

/// An integer declared without a value starts at zero.
pub fn zero_value(console: &mut Console) -> Result<(), &'static str> {
    let hp = i32::default();
    console.println(&[Operand::Int(hp)])
}

pub fn declare_then_assign(console: &mut Console) -> Result<(), &'static str> {
    let hp: i32;
    hp = 100;
    console.println(&[Operand::Int(hp)])
}

pub fn declare_many(console: &mut Console) -> Result<(), &'static str> {
    let (hp, mp) = (100, 260);
    console.println(&[Operand::Int(hp), Operand::Int(mp)])
}

/// The 3 is bound to `_` and dropped.
pub fn discard(console: &mut Console) -> Result<(), &'static str> {
    let (_, b) = (3, 2);
    console.println(&[Operand::Int(b)])
}

fn print_pair(console: &mut Console, a: i32, b: i32) -> Result<(), &'static str> {
    console.println(&[Operand::Str("a = "), Operand::Int(a), Operand::Str("b = "), Operand::Int(b)])
}

pub fn swap_temp(console: &mut Console) -> Result<(), &'static str> {
    let (mut a, mut b) = (10, 20);
    swap::swap_with_temp(&mut a, &mut b);
    print_pair(console, a, b)
}

pub fn swap_simultaneous(console: &mut Console) -> Result<(), &'static str> {
    let (mut a, mut b) = (10, 20);
    swap::swap_simultaneous(&mut a, &mut b);
    print_pair(console, a, b)
}

pub fn print_modes(console: &mut Console) -> Result<(), &'static str> {
    let (a, b) = (10, 20);

    console.print(&[Operand::Int(a)])?;
    console.print(&[Operand::Int(b)])?;

    console.println(&[Operand::Str("a = "), Operand::Int(a)])?;
    console.println(&[Operand::Str("b = "), Operand::Int(b)])?;

    console.printf("a = %d\n", &[Operand::Int(a)])?;
    console.printf("b = %d", &[Operand::Int(b)])
}

pub fn lesson_by_name(name: &str) -> Option<Lesson> {
    debug_assert_eq!(LESSON_NAMES.len(), LESSONS.len());

    let index = LESSON_NAMES.iter().position(|known| known.eq_ignore_ascii_case(name))?;
    LESSONS.get(index).cloned()
}

pub fn run_lesson(name: &str, console: &mut Console) -> Result<(), &'static str> {
    let lesson = lesson_by_name(name).ok_or("unknown lesson")?;
    debug!("running lesson {}", name);
    lesson(console)
}
