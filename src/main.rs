use fitdays::commands::Cli;
use fitdays::libs::logging;
use fitdays::libs::messages::macros::is_debug_mode;

fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        logging::init();
    }

    Cli::menu()
}
