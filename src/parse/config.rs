use clap::ArgMatches;

use ttt_lib::config::{Config, Marker};

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(marker)) = args.try_get_one::<Marker>("true_marker") {
        the_config.true_marker = *marker
    };
    if let Ok(Some(marker)) = args.try_get_one::<Marker>("false_marker") {
        the_config.false_marker = *marker
    };
    if let Ok(Some(padding)) = args.try_get_one::<usize>("padding") {
        the_config.padding = *padding
    };

    if let Ok(Some(value)) = args.try_get_one::<bool>("no_colour") {
        the_config.colour = !*value
    };
    if let Ok(Some(value)) = args.try_get_one::<bool>("expressions") {
        the_config.show_expressions = *value
    };
    if let Ok(Some(value)) = args.try_get_one::<bool>("json") {
        the_config.json = *value
    };

    if the_config.true_marker == the_config.false_marker {
        log::warn!("True and false share the marker {}", the_config.true_marker);
    }

    the_config
}
