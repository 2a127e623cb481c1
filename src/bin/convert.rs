use std::io::{self, Read};
use std::process;

fn main() {
    let mut markdown = String::new();
    io::stdin().read_to_string(&mut markdown).expect("read stdin");
    match markdown2html::markdown_to_html(&markdown) {
        Ok(html) => print!("{html}"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}
