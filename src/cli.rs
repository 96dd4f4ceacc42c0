use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Reads two numbers and an operator, prints the result", long_about = None)]
pub struct Args {
    /// Log each step of the calculation to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["calc"]).unwrap();
        assert!(!args.verbose);
    }

    #[test]
    fn test_verbose_flag() {
        assert!(Args::try_parse_from(["calc", "-v"]).unwrap().verbose);
        assert!(Args::try_parse_from(["calc", "--verbose"]).unwrap().verbose);
        assert!(Args::try_parse_from(["calc", "--path", "x"]).is_err());
    }
}
