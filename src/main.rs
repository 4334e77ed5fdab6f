use anyhow::Result;

fn main() -> Result<()> {
    climbs_indexer::cli::run()
}
