use std::sync::mpsc;
use std::thread;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kira_mutscan::cli::{Cli, Commands, KindArg, RunArgs, SequenceArgs};
use kira_mutscan::ctx::{Ctx, RunEvent};
use kira_mutscan::io::summary::format_summary;
use kira_mutscan::pipeline::Pipeline;
use kira_mutscan::registry::ScorerRegistry;
use kira_mutscan::schema::v1::AnalysisKind;
use kira_mutscan::seq::{fasta, pdb};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run_scan(args),
        Commands::Scorers => {
            print_scorers(&ScorerRegistry::builtin());
            Ok(())
        }
        Commands::Sequence(args) => print_sequence(args),
    }
}

fn run_scan(args: RunArgs) -> Result<()> {
    let kind = to_kind(args.kind);

    let mut ctx = Ctx::new(
        kind,
        args.scorer,
        args.input,
        args.out,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.scorers_dir = args.scorers_dir;
    ctx.enable_ai = args.ai;
    ctx.provider = args.provider;
    ctx.api_key = args.api_key;
    ctx.write_json = args.json;

    if ctx.scorers.find(&ctx.scorer, kind).is_none() {
        let supported: Vec<&str> = ctx.scorers.for_kind(kind).map(|d| d.name).collect();
        bail!(
            "unknown {} scorer '{}'; supported: {}",
            kind.as_str(),
            ctx.scorer,
            supported.join(", ")
        );
    }

    let (tx, rx) = mpsc::channel::<RunEvent>();
    ctx.progress = Some(tx);
    let printer = thread::spawn(move || {
        for event in rx {
            match event {
                RunEvent::Started => println!("phase: started"),
                RunEvent::Scored => println!("phase: scored (numeric results ready)"),
                RunEvent::Summarizing => println!("phase: summarizing"),
                RunEvent::Complete => println!("phase: complete"),
                RunEvent::Failed(message) => println!("phase: failed ({})", message),
            }
        }
    });

    let result = Pipeline::full_run().run(&mut ctx);
    ctx.progress = None;
    let _ = printer.join();
    result?;

    print!("{}", format_summary(&ctx)?);
    Ok(())
}

fn print_scorers(registry: &ScorerRegistry) {
    for kind in [AnalysisKind::Sequence, AnalysisKind::Structure] {
        println!("{} scorers:", kind.as_str());
        for def in registry.for_kind(kind) {
            println!("{}\t{}", def.name, def.id);
        }
    }
}

fn print_sequence(args: SequenceArgs) -> Result<()> {
    let sequence = match to_kind(args.kind) {
        AnalysisKind::Sequence => fasta::read_sequence(&args.input)?,
        AnalysisKind::Structure => pdb::read_sequence(&args.input)?,
    };
    println!("{}", sequence);
    Ok(())
}

fn to_kind(arg: KindArg) -> AnalysisKind {
    match arg {
        KindArg::Sequence => AnalysisKind::Sequence,
        KindArg::Structure => AnalysisKind::Structure,
    }
}
