//! Entrypoint.

fn main() -> anyhow::Result<()> {
    roaster::initialize_command_line()
}
