// Behavioural Pattern: Template Method (data parsers)
// Load, parse, validate, use. Only `parse` differs between formats; the rest
// of the pipeline is shared.

use design_patterns::console;
use design_patterns::PatternError;
use serde_json::Value;

#[derive(Debug)]
struct ParseReport {
    steps: Vec<String>,
    data: Value,
}

trait DataParser {
    fn format(&self) -> &'static str;

    fn parse(&self, raw: &str) -> Result<Value, PatternError>;

    /// The template. Any failing step aborts the remaining ones.
    fn parse_data(&self, raw: &str) -> Result<ParseReport, PatternError> {
        let mut steps = vec![self.load_data()];

        steps.push(format!("Parsing data as {}...", self.format()));
        let data = self.parse(raw)?;

        steps.push(self.validate(&data)?);
        steps.push(self.use_data(&data));

        Ok(ParseReport { steps, data })
    }

    fn load_data(&self) -> String {
        "Loading data (could be from a file, database, etc.)".to_string()
    }

    fn validate(&self, data: &Value) -> Result<String, PatternError> {
        match data {
            Value::Null => Err(PatternError::Validation("parsed data is empty".to_string())),
            Value::String(s) if s.trim().is_empty() => {
                Err(PatternError::Validation("parsed data is empty".to_string()))
            }
            _ => Ok("Validating the parsed data...".to_string()),
        }
    }

    fn use_data(&self, _data: &Value) -> String {
        "Using the parsed data (could be displaying, storing, etc.)".to_string()
    }
}

struct JsonParser;

impl DataParser for JsonParser {
    fn format(&self) -> &'static str {
        "JSON"
    }

    fn parse(&self, raw: &str) -> Result<Value, PatternError> {
        serde_json::from_str(raw).map_err(|err| PatternError::parse("JSON", err.to_string()))
    }
}

// Stand-in: checks the document is wrapped in tags and keeps it as text.
struct XmlParser;

impl DataParser for XmlParser {
    fn format(&self) -> &'static str {
        "XML"
    }

    fn parse(&self, raw: &str) -> Result<Value, PatternError> {
        let trimmed = raw.trim();
        if trimmed.starts_with('<') && trimmed.ends_with('>') {
            Ok(Value::String(trimmed.to_string()))
        } else {
            Err(PatternError::parse("XML", "document is not enclosed in tags"))
        }
    }

    fn use_data(&self, data: &Value) -> String {
        let length = data.as_str().map(str::len).unwrap_or_default();
        format!("Using {} characters of XML", length)
    }
}

fn run(parser: &dyn DataParser, raw: &str) {
    match parser.parse_data(raw) {
        Ok(report) => {
            for step in &report.steps {
                console::step(step);
            }
            console::outcome(format!("Result: {}", report.data));
        }
        Err(err) => console::failure(err.to_string()),
    }
}


fn main() {
    console::banner("Template Method Pattern (data parsers)");

    console::outcome("Parsing JSON data:");
    run(&JsonParser, r#"{"name": "sample data", "values": [1, 2, 3]}"#);
    println!();

    console::outcome("Parsing XML data:");
    run(&XmlParser, "<data><name>sample data</name></data>");
    println!();

    console::outcome("Parsing malformed JSON:");
    run(&JsonParser, "sample data");

    console::when_to_use("template-data-parser");
}
