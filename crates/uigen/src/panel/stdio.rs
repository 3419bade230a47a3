use crate::prelude::{eprintln, *};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Serve panel messages until stdin closes. Each message is answered in
/// full before the next line is read.
pub async fn run_stdio(session: &super::Session) -> Result<()> {
    let verbose = session.global.verbose;
    if verbose {
        eprintln!("Starting panel bridge on stdio...");
        eprintln!();
    }

    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if verbose {
            eprintln!("Received: {}", summarize(trimmed));
        }

        for response in super::handle_message(trimmed, session).await {
            let response_json = serde_json::to_string(&response)?;

            if verbose {
                eprintln!("Sending: {}", summarize(&response_json));
            }

            stdout.write_all(response_json.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}

/// Image payloads and generated code make for very long lines.
fn summarize(line: &str) -> String {
    const LIMIT: usize = 200;

    match line.char_indices().nth(LIMIT) {
        Some((end, _)) => format!("{}... ({} bytes)", &line[..end], line.len()),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize() {
        assert_eq!(summarize("short"), "short");

        let long = "x".repeat(250);
        assert_eq!(summarize(&long), format!("{}... (250 bytes)", "x".repeat(200)));
    }
}
