use colored::Colorize;

pub fn print_error_message(error_message: &str) {
    println!("{}", error_message.red());
}
