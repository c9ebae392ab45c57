//! Vision prompt variants. One instruction per schema version; the model is
//! told the exact output field names so the reply deserializes into the
//! matching report shape.

use shared::SchemaVersion;

pub const EXTENDED_INSTRUCTION: &str = "Analyze this snake image and provide the following information:\n\
1. Species identification (include confidence level from 0-100)\n\
2. Whether it's venomous\n\
3. Key identifying features\n\
4. Safety concerns\n\
5. Typical habitats and locations\n\
6. First aid steps if bitten (provide as an array of clear, complete steps very specific for the snake in the image)\n\
7. Key facts about this species (provide 5 interesting facts)\n\
8. Top 3 sources with their URLs\n\
Format the response as a JSON object with these fields: species, confidence (number), venomous (true/false), features, safety_concerns, habitat, first_aid_steps (array of strings), interesting_facts (array of 5 strings), sources (array of objects with name and url properties). If the image does not contain a snake, respond with a simple message stating that.";

pub const BASIC_INSTRUCTION: &str = "Analyze this snake image and provide the following information:\n\
1. Species identification (optionally include confidence level from 0-100)\n\
2. Whether it's venomous\n\
3. Key identifying features\n\
4. Safety concerns\n\
Format the response as a JSON object with these fields: species, venomous (true/false), features, safety_concerns, and optionally confidence (number). If the image does not contain a snake, respond with a simple message stating that.";

pub fn instruction(schema: SchemaVersion) -> &'static str {
    match schema {
        SchemaVersion::Basic => BASIC_INSTRUCTION,
        SchemaVersion::Extended => EXTENDED_INSTRUCTION,
    }
}
