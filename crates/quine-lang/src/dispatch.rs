use indexmap::IndexMap;

use crate::command::{
    Command, DeleteCommand, IfCommand, LetCommand, MaxtermsCommand, MintermsCommand, PrintCommand,
    QuitCommand, VariablesCommand,
};

static LET: LetCommand = LetCommand;
static PRINT: PrintCommand = PrintCommand;
static DELETE: DeleteCommand = DeleteCommand;
static MINTERMS: MintermsCommand = MintermsCommand;
static MAXTERMS: MaxtermsCommand = MaxtermsCommand;
static VARIABLES: VariablesCommand = VariablesCommand;
static IF: IfCommand = IfCommand;
static QUIT: QuitCommand = QuitCommand;

/// Symbol-to-command registry.
///
/// Registration order is preserved so diagnostics can list the known
/// commands stably.
#[derive(Default)]
pub struct DispatchTable {
    table: IndexMap<&'static str, &'static dyn Command>,
}

impl DispatchTable {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry with the built-in command set and its aliases.
    pub fn with_default_commands() -> Self {
        let mut dispatch = Self::new();
        dispatch.register(&["let", "l"], &LET);
        dispatch.register(&["print", "p"], &PRINT);
        dispatch.register(&["delete", "d"], &DELETE);
        dispatch.register(&["minterms", "min"], &MINTERMS);
        dispatch.register(&["maxterms", "max"], &MAXTERMS);
        dispatch.register(&["variables", "v"], &VARIABLES);
        dispatch.register(&["if"], &IF);
        dispatch.register(&["quit", "q"], &QUIT);
        dispatch
    }

    /// Bind every symbol in `symbols` to the same command.
    pub fn register(&mut self, symbols: &[&'static str], command: &'static dyn Command) {
        for &symbol in symbols {
            self.table.insert(symbol, command);
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&dyn Command> {
        self.table.get(symbol).copied()
    }

    /// Registered symbols, in registration order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.keys().copied()
    }
}
