mod board;
mod cli;
mod data;
mod models;
mod search;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::{self, Write};

use board::{Board, BoardCommand, LaneId, MoveRequest, TaskFilter};
use cli::{Cli, Commands};
use models::Status;
use search::{TitleIndex, TitleMatch, MATCH_THRESHOLD};
use ui::run_tui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut board = data::seed_board();

    match cli.command {
        Some(Commands::Tasks { client, status, search }) => {
            let mut filter = TaskFilter::default();
            if let Some(name) = client {
                match resolve_client(&board, &name) {
                    Some(id) => filter.client_id = Some(id),
                    None => {
                        println!("Cliente '{}' não encontrado.", name);
                        return Ok(());
                    }
                }
            }
            if let Some(input) = status {
                match Status::parse(&input) {
                    Some(status) => filter.status = Some(status),
                    None => {
                        println!("Status '{}' inválido (use todo, doing, review ou done).", input);
                        return Ok(());
                    }
                }
            }
            if let Some(query) = search {
                filter.query = query;
            }
            print_tasks(&board, &filter);
        }
        Some(Commands::Board { json }) => {
            if json {
                let snapshot = serde_json::json!({
                    "columns": board.columns(),
                    "tasks": board.tasks(),
                });
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print_board(&board);
            }
        }
        Some(Commands::Mv { task, lane, at }) => {
            let Some(task_id) = resolve_task(&board, &task) else {
                return Ok(());
            };
            let Some(dest_lane) = resolve_lane(&board, &lane) else {
                println!("Coluna '{}' não encontrada.", lane);
                return Ok(());
            };
            let Some(source) = board.lane_of(task_id).cloned() else {
                println!("Tarefa fora do quadro.");
                return Ok(());
            };
            let Some(source_index) = board
                .column(&source)
                .and_then(|c| c.task_ids.iter().position(|&id| id == task_id))
            else {
                println!("Tarefa fora do quadro.");
                return Ok(());
            };
            let dest_len = board.column(&dest_lane).map(|c| c.task_ids.len()).unwrap_or(0);
            let dest_index = at.unwrap_or(dest_len);

            let changed = board.apply(BoardCommand::Move(MoveRequest {
                task_id,
                source,
                source_index,
                dest: Some((dest_lane, dest_index)),
            }));

            if changed {
                println!("Tarefa movida para '{}'.", lane);
                print_board(&board);
            } else {
                println!("Nada mudou.");
            }
        }
        Some(Commands::AddColumn { title }) => {
            let changed = board.apply(BoardCommand::AddColumn { title: title.clone() });
            if changed {
                print_board(&board);
            } else {
                println!("Título vazio, nenhuma coluna criada.");
            }
        }
        Some(Commands::Clients) => {
            for client in board.clients() {
                println!(
                    "{} ({}) - {} posts/semana - {}",
                    client.name,
                    client.industry,
                    client.posts_per_week,
                    client.tags.join(", ")
                );
            }
        }
        Some(Commands::Events) => {
            let mut events = data::calendar_events();
            events.sort_by_key(|e| (e.date, e.id));
            for event in events {
                let client = board
                    .client(event.client_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                println!(
                    "{} {} {} [{}] [{}] ({})",
                    event.date.format("%d/%m"),
                    event.time,
                    event.title,
                    event.content_type.as_str(),
                    event.status.label(),
                    client
                );
            }
        }
        Some(Commands::Tui) => {
            run_tui(board)?;
        }
        Some(Commands::Completions { shell }) => {
            use clap_complete::{generate, Shell};
            let shell = shell.to_lowercase();
            let shell_enum = match shell.as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "elvish" => Shell::Elvish,
                "powershell" => Shell::PowerShell,
                _ => {
                    println!("Unsupported shell: {}", shell);
                    return Ok(());
                }
            };
            let mut cmd = Cli::command();
            generate(shell_enum, &mut cmd, "pauta", &mut std::io::stdout());
        }
        None => {
            // Default behavior: launch the TUI
            run_tui(board)?;
        }
    }

    Ok(())
}

// Helper function to ask user for confirmation
fn ask_user_confirmation(input_name: &str, suggested_name: &str) -> bool {
    print!("'{}' não encontrada. Você quis dizer '{}'? (s/n): ", input_name, suggested_name);
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "s" | "sim" | "y" | "yes")
}

// Resolve a user-typed task title against the board, fuzzy matching with a
// did-you-mean prompt when the title is close but not exact
fn resolve_task(board: &Board, input: &str) -> Option<u64> {
    let titles: Vec<String> = board.tasks().iter().map(|t| t.title.clone()).collect();
    let index = TitleIndex::build(titles);

    let resolved = match index.find_match(input) {
        TitleMatch { exact: true, suggestion: Some(title), .. } => title,
        TitleMatch { suggestion: Some(suggestion), score: Some(score), .. }
            if score >= MATCH_THRESHOLD =>
        {
            if ask_user_confirmation(input, &suggestion) {
                suggestion
            } else {
                println!("Operação cancelada.");
                return None;
            }
        }
        _ => {
            println!("Tarefa '{}' não encontrada.", input);
            return None;
        }
    };

    board.tasks().iter().find(|t| t.title == resolved).map(|t| t.id)
}

fn resolve_client(board: &Board, input: &str) -> Option<u32> {
    let input = input.to_lowercase();
    board
        .clients()
        .iter()
        .find(|c| c.name.to_lowercase() == input)
        .map(|c| c.id)
}

fn resolve_lane(board: &Board, input: &str) -> Option<LaneId> {
    if let Some(status) = Status::parse(input) {
        return Some(LaneId::Status(status));
    }
    board.column_by_title(input).map(|c| c.lane.clone())
}

fn print_tasks(board: &Board, filter: &TaskFilter) {
    let tasks = board.filtered_tasks(filter);
    if tasks.is_empty() {
        println!("Nenhuma tarefa encontrada.");
        return;
    }
    for task in tasks {
        let client = board
            .client(task.client_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        println!(
            "#{} [{}] [{}] {} ({}) vence {} [{}]",
            task.id,
            task.status.as_str(),
            task.content_type.as_str(),
            task.title,
            client,
            task.due_date.format("%d/%m"),
            task.priority.label()
        );
    }
}

fn print_board(board: &Board) {
    for column in board.columns() {
        println!("{} ({})", column.title, column.task_ids.len());
        for (position, &task_id) in column.task_ids.iter().enumerate() {
            if let Some(task) = board.task(task_id) {
                let client = board
                    .client(task.client_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                println!("  {}. {} ({})", position + 1, task.title, client);
            }
        }
    }
}
