use std::io::{self, BufRead, Write};

use dayplan::task::validate_clock;
use dayplan::{Priority, Schedule, ScheduleError, Task};
use tracing_subscriber::EnvFilter;

const MENU: &str = "\n1. Add Task\n2. Edit Task\n3. Complete Task\n4. Remove Task\n5. View Tasks\n6. View Tasks by Priority\n7. Exit";

/// Prints a prompt and reads one trimmed line. `None` means stdin hit EOF.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn parse_priority(raw: &str) -> Option<Priority> {
    match raw.parse::<Priority>() {
        Ok(priority) => Some(priority),
        Err(err) => {
            println!("Error: {err}.");
            None
        }
    }
}

fn check_clock(value: &str) -> bool {
    match validate_clock(value) {
        Ok(()) => true,
        Err(err) => {
            println!("Error: {err}.");
            false
        }
    }
}

fn print_listing(tasks: &[&Task]) {
    for task in tasks {
        println!("{}", task.display_line());
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .compact()
        .init();

    let mut schedule = Schedule::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("{MENU}");
        let Some(choice) = prompt(&mut input, "Enter your choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(description) = prompt(&mut input, "Enter task description: ")? else {
                    break;
                };
                let Some(start) = prompt(&mut input, "Enter start time (HH:MM): ")? else {
                    break;
                };
                let Some(end) = prompt(&mut input, "Enter end time (HH:MM): ")? else {
                    break;
                };
                let Some(raw_priority) = prompt(&mut input, "Enter priority (High, Medium, Low): ")?
                else {
                    break;
                };
                if !check_clock(&start) || !check_clock(&end) {
                    continue;
                }
                let Some(priority) = parse_priority(&raw_priority) else {
                    continue;
                };
                match schedule.add_task(Task::new(description, start, end, priority)) {
                    Ok(()) => println!("Task added successfully. No conflicts."),
                    Err(ScheduleError::Conflict { with }) => {
                        println!("Error: Task conflicts with an existing task \"{with}\".");
                    }
                    Err(err) => println!("Error: {err}."),
                }
            }
            "2" => {
                let Some(target) = prompt(&mut input, "Enter the description of the task to edit: ")?
                else {
                    break;
                };
                let Some(description) = prompt(&mut input, "Enter new task description: ")? else {
                    break;
                };
                let Some(start) = prompt(&mut input, "Enter new start time (HH:MM): ")? else {
                    break;
                };
                let Some(end) = prompt(&mut input, "Enter new end time (HH:MM): ")? else {
                    break;
                };
                let Some(raw_priority) =
                    prompt(&mut input, "Enter new priority (High, Medium, Low): ")?
                else {
                    break;
                };
                if !check_clock(&start) || !check_clock(&end) {
                    continue;
                }
                let Some(priority) = parse_priority(&raw_priority) else {
                    continue;
                };
                match schedule.edit_task(&target, description, start, end, priority) {
                    Ok(()) => println!("Task edited successfully."),
                    Err(_) => println!("Error: Task not found."),
                }
            }
            "3" => {
                let Some(description) =
                    prompt(&mut input, "Enter the description of the task to mark as completed: ")?
                else {
                    break;
                };
                match schedule.complete_task(&description) {
                    Ok(()) => println!("Task marked as completed."),
                    Err(_) => println!("Error: Task not found."),
                }
            }
            "4" => {
                let Some(description) =
                    prompt(&mut input, "Enter the description of the task to remove: ")?
                else {
                    break;
                };
                match schedule.remove_task(&description) {
                    Ok(()) => println!("Task removed successfully."),
                    Err(_) => println!("Error: Task not found."),
                }
            }
            "5" => {
                if schedule.tasks().is_empty() {
                    println!("No tasks scheduled for the day.");
                } else {
                    let all: Vec<&Task> = schedule.tasks().iter().collect();
                    print_listing(&all);
                }
            }
            "6" => {
                let Some(raw_priority) = prompt(&mut input, "Enter priority (High, Medium, Low): ")?
                else {
                    break;
                };
                let Some(priority) = parse_priority(&raw_priority) else {
                    continue;
                };
                let matching = schedule.tasks_by_priority(priority);
                if matching.is_empty() {
                    println!("No tasks found with priority: {raw_priority}");
                } else {
                    print_listing(&matching);
                }
            }
            "7" => {
                println!("Exiting application.");
                break;
            }
            _ => println!("Invalid choice. Try again."),
        }
    }

    Ok(())
}
