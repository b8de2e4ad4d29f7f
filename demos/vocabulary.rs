//! Print the vocabulary of a small C snippet with word frequencies.

use domaincloud::{FrequencyTable, RenderMode, count, render, strip_str};

const SOURCE: &str = r#"
/* Parse words from an input stream. */
static int
count_words (FILE *istr, struct word_table *words)
{
    int cur; // current char
    while ((cur = getc (istr)) != EOF)
        if (cur == '"')
            skip_string (istr, "\"");
    return 0;
}
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- stripped ---");
    println!("{}", strip_str(SOURCE));

    let mut table = FrequencyTable::new();
    count(SOURCE.as_bytes(), &mut table)?;

    println!("--- words ---");
    render(std::io::stdout().lock(), &table, RenderMode::Freq)?;
    Ok(())
}
