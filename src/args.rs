// src/args.rs
use clap::Parser;
use std::ffi::OsString;

/// Raw command line.
///
/// Every token is kept verbatim and in order; `Config::from_args` gives
/// them meaning. Tokens other than `-a`, `-s`, `-f`, `-p` and `-o` are
/// input paths, including `--`, `--help` and combined forms like `-as`.
#[derive(Parser, Debug)]
#[command(
    name = "line_sorter",
    version,
    about = "入力行を整数/浮動小数点数/文字列に分類してファイルへ書き出すツール",
    override_usage = "line_sorter [-a] [-s] [-f] [-p PREFIX] [-o DIR] FILE...",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// オプション（-a 追記, -s 簡易統計, -f 詳細統計, -p PREFIX, -o DIR）と入力ファイル。順不同
    #[arg(value_name = "ARG", num_args = 0.., allow_hyphen_values = true)]
    pub tokens: Vec<OsString>,
}

impl Args {
    /// Parse the process arguments.
    pub fn from_env() -> Self {
        Self::from_tokens(std::env::args_os().skip(1))
    }

    /// Parse `tokens` (without the binary name).
    ///
    /// A leading `--` is inserted so clap stops recognising options and
    /// hands over every user token untouched, a user-supplied `--` included.
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = [OsString::from("line_sorter"), OsString::from("--")]
            .into_iter()
            .chain(tokens.into_iter().map(Into::into));
        Self::parse_from(argv)
    }
}
