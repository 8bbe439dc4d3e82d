use std::error::Error;

// Embeds the commit SHA shown by `gbe-build --version`.
fn main() -> Result<(), Box<dyn Error>> {
    vergen_gitcl::Emitter::default()
        .add_instructions(
            &vergen_gitcl::BuildBuilder::default()
                .build_date(true)
                .build()?,
        )?
        .add_instructions(
            &vergen_gitcl::GitclBuilder::default()
                .sha(true)
                .dirty(true)
                .build()?,
        )?
        .emit()?;
    Ok(())
}
