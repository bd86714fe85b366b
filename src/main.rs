// SPDX-License-Identifier: MPL-2.0
use iced_inbox::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        server: args.opt_value_from_str("--server").unwrap(),
    };

    app::run(flags)
}
