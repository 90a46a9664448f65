use anyhow::Result;

fn main() -> Result<()> {
    morsel_lib::main()
}
