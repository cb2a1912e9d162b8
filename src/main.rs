// SPDX-License-Identifier: MPL-2.0
use iced_mosaic::app::{self, Flags};
use iced_mosaic::config::{self, SortOrder};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    config::init_cli_override(args.opt_value_from_str("--config-dir").unwrap());

    let sort_value: Option<String> = args.opt_value_from_str("--sort").unwrap();
    let sort_order = match sort_value {
        Some(value) => {
            let parsed = SortOrder::from_cli(&value);
            if parsed.is_none() {
                eprintln!("Unknown sort order {value:?}; using the configured default");
            }
            parsed
        }
        None => None,
    };

    let flags = Flags {
        sort_order,
        path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
