//! Purpose: Hold top-level CLI command dispatch for `arith`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Results go to stdout; failures return an `Error` for `main` to emit.

use super::*;

use arith::{add, divide, greeting, multiply, subtract};

pub(super) fn dispatch_command(command: Command) -> Result<(), Error> {
    match command {
        Command::Demo => {
            for line in demo::demo_lines() {
                println!("{line}");
            }
            Ok(())
        }
        Command::Greet { json } => {
            if json {
                emit_json(json!({ "greeting": greeting() }));
            } else {
                println!("{}", greeting());
            }
            Ok(())
        }
        Command::Add(Operands { a, b, json }) => {
            let result = add(a, b);
            emit_operation(OperationOutput { op: "add", a, b, result }, json)
        }
        Command::Subtract(Operands { a, b, json }) => {
            let result = subtract(a, b);
            emit_operation(OperationOutput { op: "subtract", a, b, result }, json)
        }
        Command::Multiply(Operands { a, b, json }) => {
            let result = multiply(a, b);
            emit_operation(OperationOutput { op: "multiply", a, b, result }, json)
        }
        Command::Divide(Operands { a, b, json }) => {
            let result = divide(a, b)?;
            emit_operation(OperationOutput { op: "divide", a, b, result }, json)
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "arith", &mut io::stdout());
            Ok(())
        }
    }
}
