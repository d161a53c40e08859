use clap::Parser;
use std::path::PathBuf;

use piclabel::{ClassifyPipeline, RtenClassifier, TOP_K};

#[derive(Parser)]
#[command(name = "piclabel")]
#[command(about = "Classify a photo and show the top predictions")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Path to the .rten classifier model
    /// (default: ~/.cache/piclabel/classifier.rten)
    #[arg(long, value_name = "FILE")]
    model: Option<PathBuf>,

    /// Path to the class labels file, one label per line
    /// (default: ~/.cache/piclabel/labels.txt)
    #[arg(long, value_name = "FILE")]
    labels: Option<PathBuf>,

    /// Number of predictions to show
    #[arg(long, default_value_t = TOP_K)]
    top: usize,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Drop classification failures silently instead of reporting them
    #[arg(long)]
    silent_failures: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let (default_model, default_labels) = RtenClassifier::default_paths()?;
    let model_path = args.model.unwrap_or(default_model);
    let labels_path = args.labels.unwrap_or(default_labels);

    if args.verbose {
        println!("Loading model: {:?}", model_path);
    }

    let classifier = RtenClassifier::new(&model_path, &labels_path)?;

    let pipeline = ClassifyPipeline::new(Box::new(classifier))
        .with_verbose(args.verbose)
        .with_top_k(args.top);

    if args.verbose {
        println!("Classifying image: {:?}\n", args.image_path);
    }

    match pipeline.classify_path(&args.image_path) {
        Ok(result) => {
            println!("{}\n", result.top_label);
            for prediction in &result.predictions {
                println!(
                    "{:<32} {:>6.2}%",
                    prediction.label,
                    prediction.probability * 100.0
                );
            }
        }
        Err(e) => {
            // Default is to report; --silent-failures keeps the original
            // best-effort behavior of leaving the display unchanged.
            if !args.silent_failures {
                return Err(e.into());
            }
        }
    }

    Ok(())
}
