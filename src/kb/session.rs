use std::io::{self, BufRead, Write};

use crate::{config::is_exit_keyword, kb::bot::KnowledgeBot};

pub const BANNER: &str = "Security Knowledge Bot (local) 🔐";
pub const PROMPT: &str = "Você: ";

/// Interactive question loop.
///
/// Reads one question per line until end of input or an exit keyword.
/// Blank lines are ignored.
pub fn run_session<R, W>(bot: &KnowledgeBot, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{BANNER}")?;
    writeln!(output, "Digite sua pergunta (ou 'sair')\n")?;

    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "\nEncerrando.")?;
            break;
        }
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if is_exit_keyword(question) {
            writeln!(output, "Até mais!")?;
            break;
        }

        writeln!(output, "\nBot:\n{}\n", bot.answer(question))?;
    }
    output.flush()
}
