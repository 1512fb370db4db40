use clap::ArgMatches;

/// Options which relate to the binary, rather than to the display of a table.
#[derive(Debug, Default)]
pub struct ConfigIO {
    pub execute: Option<String>,
    pub reference: bool,
    pub markdown_help: bool,
}

impl ConfigIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        let mut the_config = ConfigIO::default();

        if let Ok(Some(commands)) = args.try_get_one::<String>("execute") {
            the_config.execute = Some(commands.to_owned())
        };
        if let Ok(Some(value)) = args.try_get_one::<bool>("reference") {
            the_config.reference = *value
        };
        if let Ok(Some(value)) = args.try_get_one::<bool>("markdown_help") {
            the_config.markdown_help = *value
        };

        the_config
    }

    /// The commands to run, if given on the command line.
    pub fn commands(&self) -> Option<impl Iterator<Item = &str>> {
        self.execute
            .as_deref()
            .map(|commands| commands.split(';').map(str::trim).filter(|c| !c.is_empty()))
    }
}
