//! CLI entrypoint.

use std::error::Error;
use std::io::{self, Read};
use std::process;

use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use pysyntax_core::{OutputFormat, PySyntax, PySyntaxError, Registry};
use pysyntax_render::SyntaxWriter;
use pysyntax_render::writer::display_name;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
/// Output formats the CLI can emit.
enum Format {
	/// Plain declaration text (default).
	Plain,
	/// Presentation markup with keyword spans and reference links.
	Markup,
}

impl From<Format> for OutputFormat {
	fn from(format: Format) -> Self {
		match format {
			Format::Plain => OutputFormat::Plain,
			Format::Markup => OutputFormat::Markup,
		}
	}
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the pysyntax CLI.
struct Cli {
	/// JSON member description to render; `-` reads from stdin
	#[arg(default_value = "-")]
	input: String,

	/// Language tag of the syntax generator to use
	#[arg(short = 'L', long, default_value = "python")]
	language: String,

	/// Select the output format (`plain` or `markup`)
	#[arg(long, value_enum, default_value = "plain")]
	format: Format,

	/// Indent wrapped parameters with this many spaces instead of a tab
	#[arg(short = 'w', long, value_name = "SPACES")]
	indent_width: Option<usize>,

	/// Emit nothing for constructs Python cannot express
	#[arg(long, default_value_t = false)]
	no_placeholders: bool,

	/// Highlight keywords, names and type links in plain output
	#[arg(short = 'c', long, default_value_t = false, conflicts_with = "format")]
	color: bool,

	/// List registered syntax generators and exit
	#[arg(short = 'l', long, default_value_t = false)]
	list: bool,

	/// Enable verbose logging on stderr
	#[arg(short = 'v', long, default_value_t = false)]
	verbose: bool,
}

/// Writer that prints plain text with terminal colors.
#[derive(Default)]
struct ColorWriter {
	output: String,
}

impl SyntaxWriter for ColorWriter {
	fn write_string(&mut self, text: &str) {
		self.output.push_str(text);
	}

	fn write_keyword(&mut self, keyword: &str) {
		self.output.push_str(&keyword.blue().to_string());
	}

	fn write_identifier(&mut self, name: &str) {
		self.output.push_str(&name.bold().to_string());
	}

	fn write_parameter(&mut self, name: &str) {
		self.output.push_str(&name.italic().to_string());
	}

	fn write_reference_link(&mut self, api: &str, display: Option<&str>) {
		let text = match display {
			Some(display) => display.to_string(),
			None => display_name(api).into_owned(),
		};
		self.output.push_str(&text.cyan().to_string());
	}

	fn write_line(&mut self) {
		self.output.push('\n');
	}
}

/// Install a stderr subscriber; `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_tracing(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}

/// Read the member description from a file or stdin.
fn read_input(input: &str) -> Result<String, PySyntaxError> {
	let result = if input == "-" {
		let mut json = String::new();
		io::stdin().read_to_string(&mut json).map(|_| json)
	} else {
		std::fs::read_to_string(input)
	};
	result.map_err(|source| PySyntaxError::Io {
		path: input.into(),
		source,
	})
}

/// Print the registered generators.
fn run_list(registry: &Registry) {
	let descriptors = registry.descriptors();
	let width = descriptors.iter().map(|d| d.id.len()).max().unwrap_or(0);
	for descriptor in descriptors {
		println!(
			"{:<width$} {} ({})",
			descriptor.id,
			descriptor.description,
			descriptor.alternate_ids.join(", "),
			width = width
		);
	}
}

/// Render the requested member description and print it to stdout.
fn run_cmdline(cli: &Cli) -> Result<(), Box<dyn Error>> {
	let registry = Registry::default();
	if cli.list {
		run_list(&registry);
		return Ok(());
	}

	let mut generator = registry.create(&cli.language)?;
	if let Some(width) = cli.indent_width {
		generator = generator.with_indent_width(width);
	}
	generator = generator.with_placeholders(!cli.no_placeholders);

	let json = read_input(&cli.input)?;
	let members = PySyntax::parse(&json)?;
	debug!(count = members.len(), input = %cli.input, "rendering");

	let output = if cli.color {
		let mut blocks = Vec::with_capacity(members.len());
		for member in &members {
			let mut writer = ColorWriter::default();
			generator.write_syntax(member, &mut writer)?;
			blocks.push(writer.output);
		}
		blocks.join("\n\n")
	} else {
		PySyntax::new()
			.with_generator(generator)
			.with_format(cli.format.into())
			.render_members(&members)?
	};

	println!("{output}");

	Ok(())
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(e) = run_cmdline(&cli) {
		eprintln!("{e}");
		process::exit(1);
	}
}
