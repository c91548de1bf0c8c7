use std::io::Write;

use fintel_assistant::AssistantPanel;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AskArgs;
use crate::context::AppContext;
use crate::output::{output, output_rows};
use crate::ui;

#[derive(Debug, Serialize)]
struct AskResponse {
    question: String,
    reply: String,
}

/// Handle `fintel ask`. With no question, chat line by line until EOF or `exit`.
pub async fn handle(args: &AskArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut panel = AssistantPanel::from_config(&ctx.config.assistant);

    let Some(question) = args.question() else {
        chat(&mut panel).await?;
        if args.transcript {
            output_rows(panel.messages(), flags.format)?;
        }
        return Ok(());
    };

    let reply = reply_to(&mut panel, &question)
        .await
        .ok_or_else(|| anyhow::anyhow!("ask needs a question"))?;
    if args.transcript {
        output_rows(panel.messages(), flags.format)
    } else {
        output(&AskResponse { question, reply }, flags.format)
    }
}

async fn chat(panel: &mut AssistantPanel) -> anyhow::Result<()> {
    if let Some(greeting) = panel.messages().first() {
        println!("{}", greeting.content);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt();
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }
        if let Some(reply) = reply_to(panel, &line).await {
            println!("{reply}");
        }
    }
    Ok(())
}

/// Submit one message, showing a typing line on stderr while waiting.
/// Blank input gets no reply.
async fn reply_to(panel: &mut AssistantPanel, input: &str) -> Option<String> {
    if input.trim().is_empty() {
        return None;
    }
    let indicator = ui::prefs().typing_indicator;
    if indicator {
        eprint!("Assistant is typing...");
        std::io::stderr().flush().ok();
    }
    let reply = panel.submit(input).await.map(|message| message.content.clone());
    if indicator {
        eprint!("\r\u{1b}[2K");
    }
    reply
}

fn prompt() {
    if ui::prefs().typing_indicator {
        eprint!("> ");
        std::io::stderr().flush().ok();
    }
}
