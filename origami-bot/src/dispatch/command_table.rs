//! Static command name → action mapping.

use std::collections::HashMap;

use unit_convert::{
    cup_to_ml, fahrenheit_to_celsius, feet_to_cm, fluid_ounce_to_ml, gallon_to_l, inches_to_cm,
    miles_to_km, ounce_to_g, pounds_to_kg, ConversionResult,
};

use super::text;

/// Converter entry point: raw argument in, reply text or validation error out.
pub type ConvertFn = fn(&str) -> ConversionResult;

/// What a command does.
#[derive(Clone, Copy)]
pub enum CommandAction {
    /// Fixed reply; any argument is ignored.
    Text(&'static str),
    /// Unit conversion; `usage` is sent when the argument is missing.
    Convert { convert: ConvertFn, usage: &'static str },
    /// Live SGD quotes.
    Currencies,
}

impl std::fmt::Debug for CommandAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandAction::Text(_) => f.write_str("Text"),
            CommandAction::Convert { .. } => f.write_str("Convert"),
            CommandAction::Currencies => f.write_str("Currencies"),
        }
    }
}

struct ConversionCommand {
    name: &'static str,
    info_name: &'static str,
    convert: ConvertFn,
    usage: &'static str,
    info: &'static str,
    description: &'static str,
}

const CONVERSIONS: [ConversionCommand; 9] = [
    ConversionCommand {
        name: "feet",
        info_name: "feet_info",
        convert: feet_to_cm,
        usage: text::FEET_USAGE,
        info: text::FEET_INFO,
        description: "Convert feet to cm",
    },
    ConversionCommand {
        name: "inches",
        info_name: "inches_info",
        convert: inches_to_cm,
        usage: text::INCHES_USAGE,
        info: text::INCHES_INFO,
        description: "Convert inches to cm",
    },
    ConversionCommand {
        name: "miles",
        info_name: "miles_info",
        convert: miles_to_km,
        usage: text::MILES_USAGE,
        info: text::MILES_INFO,
        description: "Convert miles to km",
    },
    ConversionCommand {
        name: "pounds",
        info_name: "pounds_info",
        convert: pounds_to_kg,
        usage: text::POUNDS_USAGE,
        info: text::POUNDS_INFO,
        description: "Convert pounds to kg and g",
    },
    ConversionCommand {
        name: "founce",
        info_name: "founce_info",
        convert: fluid_ounce_to_ml,
        usage: text::FOUNCE_USAGE,
        info: text::FOUNCE_INFO,
        description: "Convert fluid ounce to L and mL",
    },
    ConversionCommand {
        name: "ounce",
        info_name: "ounce_info",
        convert: ounce_to_g,
        usage: text::OUNCE_USAGE,
        info: text::OUNCE_INFO,
        description: "Convert ounce to kg and g",
    },
    ConversionCommand {
        name: "cup",
        info_name: "cup_info",
        convert: cup_to_ml,
        usage: text::CUP_USAGE,
        info: text::CUP_INFO,
        description: "Convert cup to mL",
    },
    ConversionCommand {
        name: "gallon",
        info_name: "gallon_info",
        convert: gallon_to_l,
        usage: text::GALLON_USAGE,
        info: text::GALLON_INFO,
        description: "Convert gallon to L",
    },
    ConversionCommand {
        name: "fahrenheit",
        info_name: "fahrenheit_info",
        convert: fahrenheit_to_celsius,
        usage: text::FAHRENHEIT_USAGE,
        info: text::FAHRENHEIT_INFO,
        description: "Convert Fahrenheit to Celcius",
    },
];

/// Command name → [`CommandAction`]. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct CommandTable {
    actions: HashMap<&'static str, CommandAction>,
}

impl CommandTable {
    /// The bot's full command set: start, help, nine conversions with their `_info`
    /// variants, and currencies.
    pub fn standard() -> Self {
        let mut actions = HashMap::new();
        actions.insert("start", CommandAction::Text(text::START_TEXT));
        actions.insert("help", CommandAction::Text(text::HELP_TEXT));
        for c in &CONVERSIONS {
            actions.insert(
                c.name,
                CommandAction::Convert {
                    convert: c.convert,
                    usage: c.usage,
                },
            );
            actions.insert(c.info_name, CommandAction::Text(c.info));
        }
        actions.insert("currencies", CommandAction::Currencies);
        Self { actions }
    }

    /// Case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<CommandAction> {
        self.actions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// `(command, description)` pairs for the client command menu, in help order.
    /// Info variants are left out to keep the menu short.
    pub fn menu() -> Vec<(&'static str, &'static str)> {
        let mut menu = vec![("start", "Welcome Message"), ("help", "List available commands")];
        menu.extend(CONVERSIONS.iter().map(|c| (c.name, c.description)));
        menu.push(("currencies", "SGD exchange rates"));
        menu
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}
