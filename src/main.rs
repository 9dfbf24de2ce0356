use std::{env, fs::read_to_string, process::exit};

use minic::{
    errors::errors::{ErrorTip, SyntaxError},
    lexer::lexer::Lexer,
    line_text,
    parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let source = read_to_string(file_path).expect("Failed to read file!");

    match parse(Lexer::new(source.clone())) {
        Ok(program) => {
            println!("Parsed {} function declaration(s)", program.funcs.len());
            for func in &program.funcs {
                println!(
                    "  {} {} ({} parameter(s), {} local(s), {} statement(s))",
                    func.return_type,
                    func.name,
                    func.params.len(),
                    func.locals.len(),
                    func.body.len()
                );
            }
        }
        Err(error) => {
            display_error(&error, &source, file_path);
            exit(1);
        }
    }
}

fn display_error(error: &SyntaxError, source: &str, file: &str) {
    /*
        Error: TokenMismatch (Expected `;` here, found `}`)
        ";" is expected instead of "}" at 3:1.
        -> final.mc
           |
         3 | }
           | ^
    */

    let position = error.position();

    if let ErrorTip::None = error.tip() {
        println!("Error: {}", error.error_name());
    } else {
        println!("Error: {} ({})", error.error_name(), error.tip());
    }
    println!("{}", error);
    println!("-> {}", file);

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;
    println!("{:>padding$}", "|");

    if let Some(text) = line_text(source, position.line) {
        let (text_removed, removed_whitespace) = remove_starting_whitespace(text);
        println!("{} | {}", line_string, text_removed.trim_end());

        let arrows = (position.column as usize)
            .saturating_sub(removed_whitespace)
            .max(1);
        println!("{:>padding$} {:->arrows$}", "|", "^");
    }
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
