use std::env;
use std::process::ExitCode;

use expense_auth::roster::{RosterStore, Student, StudentPatch};

const DEFAULT_FILE: &str = "students.json";

fn usage() -> ! {
    eprintln!(
        "usage: roster [--file PATH] <command>\n\
         commands:\n\
         \x20 list\n\
         \x20 add NAME ROLLNO DEPT DOB\n\
         \x20 update ROLLNO [--name NAME] [--dept DEPT] [--dob DOB]\n\
         \x20 delete ROLLNO"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut file = DEFAULT_FILE.to_string();
    if args.first().map(String::as_str) == Some("--file") {
        if args.len() < 2 {
            usage();
        }
        file = args[1].clone();
        args.drain(..2);
    }

    let store = RosterStore::new(&file);

    let result = match args.first().map(String::as_str) {
        Some("list") => match store.list().await {
            Ok(students) => {
                // same shape the file holds, pretty-printed
                match serde_json::to_string_pretty(&students) {
                    Ok(out) => {
                        println!("{}", out);
                        Ok(())
                    }
                    Err(e) => Err(e.into()),
                }
            }
            Err(e) => Err(e),
        },
        Some("add") => {
            if args.len() != 5 {
                usage();
            }
            store
                .add(Student {
                    name: args[1].clone(),
                    roll_no: args[2].clone(),
                    dept: args[3].clone(),
                    dob: args[4].clone(),
                })
                .await
                .map(|_| println!("Student added successfully!"))
        }
        Some("update") => {
            if args.len() < 2 {
                usage();
            }
            let roll_no = args[1].clone();
            let mut patch = StudentPatch::default();
            let mut rest = args[2..].iter();
            while let Some(flag) = rest.next() {
                let value = rest.next().unwrap_or_else(|| usage());
                match flag.as_str() {
                    "--name" => patch.name = Some(value.clone()),
                    "--dept" => patch.dept = Some(value.clone()),
                    "--dob" => patch.dob = Some(value.clone()),
                    _ => usage(),
                }
            }
            store
                .update(&roll_no, patch)
                .await
                .map(|_| println!("Student details updated successfully!"))
        }
        Some("delete") => {
            if args.len() != 2 {
                usage();
            }
            store
                .remove(&args[1])
                .await
                .map(|removed| println!("Deleted {} student(s)", removed))
        }
        _ => usage(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("roster: {}", e);
            ExitCode::FAILURE
        }
    }
}
