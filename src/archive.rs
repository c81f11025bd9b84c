//! Archive controller: reads commands, dispatches them, writes response blocks

use std::io::{BufRead, Write};

use crate::{
    api::{self, help, BlockWriter, Command},
    config::ArchiveConfig,
    error::AppResult,
    repository::Repository,
    services::Services,
};

/// One independent archive session and all of its state
#[derive(Debug)]
pub struct Archive {
    config: ArchiveConfig,
    services: Services,
    output: BlockWriter,
}

impl Archive {
    pub fn new(config: ArchiveConfig) -> Self {
        let services = Services::new(Repository::new(config.first_student_id));
        let output = BlockWriter::new(config.output_tag.clone());
        Self {
            config,
            services,
            output,
        }
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Run a command and return the text of its response block
    pub fn execute(&mut self, command: &Command) -> String {
        tracing::debug!(?command, "dispatching command");
        let services = &mut self.services;

        let result = match command {
            Command::Exit => Ok(help::FAREWELL.to_string()),
            Command::Commands => Ok(help::HELP.to_string()),
            Command::AddStudent { name } => api::students::add_student(services, name),
            Command::AddSpellbook { file, serial } => {
                api::collection::add_spellbook(services, file, *serial)
            }
            Command::AddCollection { file } => api::collection::add_collection(services, file),
            Command::SaveCollection { file } => {
                api::collection::save_collection(services, file, &self.config.collection_header)
            }
            Command::ListAll { long } => api::catalog::list_all(services, *long),
            Command::ListAvailable { long } => api::catalog::list_available(services, *long),
            Command::ListTypes => api::catalog::list_types(services),
            Command::ListInventors => api::catalog::list_inventors(services),
            Command::NumberCopies => api::catalog::number_copies(services),
            Command::Type { kind } => api::catalog::by_type(services, kind),
            Command::Inventor { inventor } => api::catalog::by_inventor(services, inventor),
            Command::Spellbook { serial, long } => api::catalog::spellbook(services, *serial, *long),
            Command::SpellbookHistory { serial } => api::catalog::spellbook_history(services, *serial),
            Command::Student { id } => api::students::student(services, *id),
            Command::StudentSpellbooks { id } => api::students::student_spellbooks(services, *id),
            Command::StudentHistory { id } => api::students::student_history(services, *id),
            Command::Rent { student_id, serial } => api::loans::rent(services, *student_id, *serial),
            Command::Relinquish { student_id, serial } => {
                api::loans::relinquish(services, *student_id, *serial)
            }
            Command::RelinquishAll { student_id } => api::loans::relinquish_all(services, *student_id),
            Command::Common(ids) => api::students::common(services, ids),
        };

        result.unwrap_or_else(|e| {
            tracing::debug!(kind = ?e.kind(), "command rejected: {}", e);
            e.to_string()
        })
    }

    /// Process `input` line by line until end of input or `EXIT`.
    /// Undecodable bytes are replaced rather than ending the session. A failing
    /// input stream ends the session quietly; a failing output stream is an error.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> AppResult<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("Input stream error: {}", e);
                    break;
                }
            }

            let line = String::from_utf8_lossy(&buf);
            let Some(command) = Command::parse(&line) else {
                continue;
            };

            let block = self.execute(&command);
            self.output.write_block(&mut output, &block)?;

            if command == Command::Exit {
                tracing::info!("Exit requested");
                break;
            }
        }

        output.flush()?;
        Ok(())
    }
}

impl Default for Archive {
    fn default() -> Self {
        Self::new(ArchiveConfig::default())
    }
}
