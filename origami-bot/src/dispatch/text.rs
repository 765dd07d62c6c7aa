//! Fixed reply strings.

pub const START_TEXT: &str =
    "Hello! Thank you for chatting with me! I am an origami that changes imperial units to metric units! :)";

pub const HELP_TEXT: &str = "The following commands are available:

/start -> Welcome Message
/help -> This message
/feet -> Convert feet to cm
/inches -> Convert inches to cm
/miles -> Convert miles to km
/pounds -> Convert pounds to kg and g
/founce -> Convert fluid ounce to L and mL
/ounce -> Convert ounce to kg and g
/cup -> Convert cup to mL
/gallon -> Convert gallon to L
/fahrenheit -> Convert Fahrenheit to Celcius
/currencies -> SGD exchange rates (MYR, USD, JPY, HKD, AUD)

Add _info to a conversion command (e.g. /feet_info) to see what it does.";

pub const FEET_INFO: &str = "I can count feets to centimetres!";
pub const INCHES_INFO: &str = "I can change inches to centimetres!";
pub const MILES_INFO: &str = "I can change miles to kilometres!";
pub const POUNDS_INFO: &str = "I can convert pounds to kilograms and grams.";
pub const FOUNCE_INFO: &str = "I can convert fluid ounce to liters and milliliters.";
pub const OUNCE_INFO: &str = "I can convert ounce to kilograms and grams.";
pub const CUP_INFO: &str = "I can convert cup to milliliters.";
pub const GALLON_INFO: &str = "I can convert gallon(s) to liters.";
pub const FAHRENHEIT_INFO: &str = "I can convert Fahrenheit to Celcius.";

pub const FEET_USAGE: &str = "Please provide the number of feet to convert to centimetres.";
pub const INCHES_USAGE: &str = "Please provide the number of inches to convert to centimetres.";
pub const MILES_USAGE: &str = "Please provide the number of miles to convert to kilometres.";
pub const POUNDS_USAGE: &str =
    "Please provide the number of pounds to convert to kilograms and grams.";
pub const FOUNCE_USAGE: &str =
    "Please provide the number of fluid ounces to convert to liters and milliliters.";
pub const OUNCE_USAGE: &str =
    "Please provide the number of ounces to convert to kilograms and grams.";
pub const CUP_USAGE: &str = "Please provide the number of cups to convert to milliliters.";
pub const GALLON_USAGE: &str = "Please provide the number of gallon(s) to convert to liters";
pub const FAHRENHEIT_USAGE: &str =
    "Please provide the temperature in Fahrenheit to convert to Celcius.";

pub const GREETING_REPLY: &str = "Hey There fellow dinosaur!";
pub const WELLBEING_REPLY: &str = "I am good! How are you?";
pub const FALLBACK_REPLY: &str = "I do not understand what you wrote...";

/// Keyword reply for free text: case-insensitive substring match, first hit wins.
pub fn free_text_reply(text: &str) -> &'static str {
    let processed = text.to_lowercase();
    if processed.contains("hello") {
        GREETING_REPLY
    } else if processed.contains("how are you") {
        WELLBEING_REPLY
    } else {
        FALLBACK_REPLY
    }
}
