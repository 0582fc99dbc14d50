//! Extract command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rakers_core::{
    JiebaSegmenter, Keyword, KeywordExtractor, LexiconSegmenter, NonPositivePolicy, SegmenterKind,
    StopWords, UnicodeSegmenter,
};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Stop-word file, one entry per line
    #[arg(short, long, value_name = "FILE", conflicts_with = "builtin_stopwords")]
    pub stopwords: Option<PathBuf>,

    /// Embedded stop-word list (see `rakers list stopwords`)
    #[arg(long, value_name = "LANG")]
    pub builtin_stopwords: Option<String>,

    /// Shortest stop word used for cutting, in characters
    #[arg(long, value_name = "N")]
    pub min_len: Option<usize>,

    /// Longest stop word used for cutting, in characters
    #[arg(long, value_name = "N")]
    pub max_len: Option<usize>,

    /// Keep only the best N keyphrases per document
    #[arg(short = 'n', long, value_name = "N")]
    pub top: Option<usize>,

    /// Word segmenter: jieba, unicode or lexicon
    #[arg(long, value_name = "NAME")]
    pub segmenter: Option<SegmenterKind>,

    /// Lexicon file; selects the lexicon segmenter unless --segmenter is given
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// What to do with non-positive scores: fail, clamp or discard
    #[arg(long, value_name = "POLICY")]
    pub non_positive: Option<NonPositivePolicy>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "RAKERS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Default embedded list when neither a file nor a language is given
const DEFAULT_STOP_WORDS: &str = "zh";

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting keyphrase extraction");
        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let extractor = self.build_extractor(&config)?;

        let files = resolve_patterns(&self.input)?;
        let total_bytes: u64 = files
            .iter()
            .filter_map(|path| FileReader::file_size(path).ok())
            .sum();
        log::info!("Processing {} file(s), {} bytes", files.len(), total_bytes);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let results: Vec<(PathBuf, Result<Vec<Keyword>>)> = files
            .par_iter()
            .map(|path| {
                let result = extract_file(&extractor, path);
                progress.file_completed(&path.display().to_string());
                (path.clone(), result)
            })
            .collect();
        progress.finish();

        let format = self.format.unwrap_or(config.output.format);
        let include_source = config.output.include_source || files.len() > 1;
        let writer = self.open_output()?;
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);

        for (path, result) in results {
            let keywords = result?;
            log::debug!("{}: {} keyphrases", path.display(), keywords.len());
            let source = include_source.then_some(path.as_path());
            formatter.format_document(source, &keywords)?;
        }
        formatter.finish()?;

        log::info!("Extraction complete");
        Ok(())
    }

    /// Merge the configuration file (if any) with command-line overrides
    fn effective_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let extraction = &mut config.extraction;
        if let Some(path) = &self.stopwords {
            extraction.stop_words = Some(path.clone());
            extraction.builtin_stop_words = None;
        }
        if let Some(code) = &self.builtin_stopwords {
            extraction.builtin_stop_words = Some(code.clone());
            extraction.stop_words = None;
        }
        if let Some(path) = &self.lexicon {
            extraction.lexicon = Some(path.clone());
            extraction.segmenter = SegmenterKind::Lexicon;
        }
        if let Some(kind) = self.segmenter {
            extraction.segmenter = kind;
        }
        if let Some(min) = self.min_len {
            extraction.settings.min_stop_word_len = min;
        }
        if let Some(max) = self.max_len {
            extraction.settings.max_stop_word_len = max;
        }
        if let Some(policy) = self.non_positive {
            extraction.settings.non_positive = policy;
        }
        if self.top.is_some() {
            extraction.settings.max_keywords = self.top;
        }

        config.validate()?;
        Ok(config)
    }

    fn build_extractor(&self, config: &CliConfig) -> Result<KeywordExtractor> {
        let extraction = &config.extraction;

        let stop_words = match (&extraction.stop_words, &extraction.builtin_stop_words) {
            (Some(path), _) => FileReader::read_stop_words(path)?,
            (None, Some(code)) => StopWords::builtin(code)
                .map_err(|e| CliError::ConfigError(e.to_string()))?,
            (None, None) => {
                log::info!("No stop words given, using embedded '{DEFAULT_STOP_WORDS}' list");
                StopWords::builtin(DEFAULT_STOP_WORDS)?
            }
        };
        log::info!("Loaded {} stop words", stop_words.len());

        let settings = extraction.settings.clone();
        log::info!("Using {} segmenter", extraction.segmenter);
        let extractor = match extraction.segmenter {
            SegmenterKind::Jieba => {
                KeywordExtractor::with_segmenter(&stop_words, settings, JiebaSegmenter::new())?
            }
            SegmenterKind::Unicode => {
                KeywordExtractor::with_segmenter(&stop_words, settings, UnicodeSegmenter)?
            }
            SegmenterKind::Lexicon => {
                let path = extraction.lexicon.as_deref().ok_or_else(|| {
                    CliError::ConfigError("lexicon segmenter needs a lexicon file".to_string())
                })?;
                let lexicon = FileReader::read_lexicon(path)?;
                log::info!("Loaded lexicon with {} words", lexicon.len());
                KeywordExtractor::with_segmenter(
                    &stop_words,
                    settings,
                    LexiconSegmenter::new(lexicon),
                )?
            }
        };

        log::debug!(
            "{} stop words active, {} outside length range",
            extractor.matcher().active_len(),
            extractor.matcher().dropped_len()
        );
        Ok(extractor)
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn extract_file(extractor: &KeywordExtractor, path: &Path) -> Result<Vec<Keyword>> {
    let text = FileReader::read_text(path)?;
    extractor
        .extract(&text)
        .map_err(|e| CliError::ExtractionError(e.to_string()))
        .with_context(|| format!("Failed to extract keyphrases from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>) -> ExtractArgs {
        ExtractArgs {
            input,
            stopwords: None,
            builtin_stopwords: None,
            min_len: None,
            max_len: None,
            top: None,
            segmenter: None,
            lexicon: None,
            non_positive: None,
            format: None,
            output: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("rakers.toml");
        fs::write(
            &config_path,
            "[extraction]\nmax_stop_word_len = 5\nmax_keywords = 3\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let mut args = args(vec!["doc.txt".to_string()]);
        args.config = Some(config_path);
        args.max_len = Some(2);
        args.non_positive = Some(NonPositivePolicy::Clamp);

        let config = args.effective_config().unwrap();
        assert_eq!(config.extraction.settings.max_stop_word_len, 2);
        assert_eq!(config.extraction.settings.max_keywords, Some(3));
        assert_eq!(
            config.extraction.settings.non_positive,
            NonPositivePolicy::Clamp
        );
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_lexicon_flag_selects_lexicon_segmenter() {
        let mut args = args(vec!["doc.txt".to_string()]);
        args.lexicon = Some(PathBuf::from("dict.txt"));
        let config = args.effective_config().unwrap();
        assert_eq!(config.extraction.segmenter, SegmenterKind::Lexicon);
    }

    #[test]
    fn test_segmenter_flag_wins_over_lexicon() {
        let mut args = args(vec!["doc.txt".to_string()]);
        args.lexicon = Some(PathBuf::from("dict.txt"));
        args.segmenter = Some(SegmenterKind::Unicode);
        let config = args.effective_config().unwrap();
        assert_eq!(config.extraction.segmenter, SegmenterKind::Unicode);
    }

    #[test]
    fn test_default_segmenter_is_jieba() {
        let config = args(vec!["doc.txt".to_string()]).effective_config().unwrap();
        assert_eq!(config.extraction.segmenter, SegmenterKind::Jieba);
    }

    #[test]
    fn test_zero_top_is_rejected() {
        let mut args = args(vec!["doc.txt".to_string()]);
        args.top = Some(0);
        assert!(args.effective_config().is_err());
    }

    #[test]
    fn test_execute_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("doc.txt");
        let stop = temp_dir.path().join("stop.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "猫喜欢吃鱼。狗喜欢吃肉。").unwrap();
        fs::write(&stop, "喜欢\n吃\n").unwrap();

        let mut args = args(vec![input.display().to_string()]);
        args.stopwords = Some(stop);
        args.output = Some(output.clone());
        args.execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        let phrases: Vec<&str> = content
            .lines()
            .map(|line| line.split('\t').nth(1).unwrap())
            .collect();
        assert_eq!(phrases, vec!["猫", "鱼", "狗", "肉"]);
    }
}
