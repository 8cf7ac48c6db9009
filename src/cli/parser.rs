use clap::Parser;

/// Command-line interface definition for visitsheet
/// CLI application to render visit records into the monthly HTML sheet
#[derive(Parser, Debug)]
#[command(
    name = "visitsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render visit records from a spreadsheet into the paginated HTML visit sheet",
    long_about = None
)]
pub struct Cli {
    /// Child's name printed in the header of every page
    #[arg(long = "child_name", default_value = "김철수", help = "아이의 이름")]
    pub child_name: String,

    /// City printed in the header of every page
    #[arg(long = "city", default_value = "서울시", help = "도시 이름")]
    pub city: String,

    /// Teacher's name printed next to the signature marker
    #[arg(long = "teacher_name", default_value = "김영희", help = "선생님 이름")]
    pub teacher_name: String,
}
