use dex_prep::config::SamplerArgs;
use dex_prep::sampler;
use dex_prep::PrepError;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = match SamplerArgs::parse(std::env::args()) {
        Ok(args) => args,
        Err(PrepError::Usage(usage)) => {
            println!("{usage}");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let outcome = sampler::filter_and_sample(&args.input, args.min_size, args.max_size, &args.output)?;

    println!(
        "Success Saved {} rows to '{}'.",
        outcome.written,
        args.output.display()
    );
    Ok(())
}
