use crate::app::events::AppCommand;

/// Maximale Anzahl gehaltener Einträge, bevor die älteren verworfen werden.
const MAX_ENTRIES: usize = 1000;

/// Protokoll der ausgeführten Commands.
///
/// Dient der Diagnose und ist der Ansatzpunkt für ein späteres Undo.
/// Läuft das Protokoll voll, wird die ältere Hälfte verworfen.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.drain(..MAX_ENTRIES / 2);
        }
        self.entries.push(command);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
