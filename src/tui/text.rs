use crate::terminal::{print_section_header, print_value};

pub const WELCOME: &str = "Welcome to the Password Generator CLI";
pub const QUESTIONS: &str = "Please answer the following questions to generate your password.";
pub const RESULT: &str = "Your Generated Password";
pub const ANOTHER: &str = "Generate Another Password?";
pub const ANOTHER_PROMPT: &str = "Do you want to generate another password?";
pub const GOODBYE: &str = "Thank You for Using the Password Generator CLI";

pub fn print_welcome() {
    print_section_header(WELCOME, '=');
    println!();
}

pub fn print_questions_header() {
    print_section_header(QUESTIONS, '-');
}

pub fn print_password(password: &str) {
    print_section_header(RESULT, '-');
    println!();
    print_value("Password", password);
    println!();
}

pub fn print_another_header() {
    print_section_header(ANOTHER, '-');
}

pub fn print_goodbye() {
    print_section_header(GOODBYE, '=');
    println!();
}
