use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use attendance_assistant::chat::{AnalyzeClient, ChatSession, EXAMPLE_PROMPTS};
use dotenvy::dotenv;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api/analyze-query";

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let url = env::var("ATTENDANCE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let client = AnalyzeClient::new(url)?;
    log::info!("sending questions to {}", client.url());

    let mut session = ChatSession::new(client);

    println!("Welcome to Attendance Assistant");
    for (title, example) in EXAMPLE_PROMPTS {
        println!("  {title}: {example}");
    }
    prompt()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if let Some(reply) = session.submit(&line).await {
            println!("{}: {}", reply.role.speaker(), reply.content);
        }
        prompt()?;
    }

    Ok(())
}
