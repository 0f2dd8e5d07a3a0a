/// One line of terminal input.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Replaces the search text; an empty line clears it.
    Query(String),
    Favorite(usize),
    Show(usize),
    Favorites,
    Unfavorite(usize),
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> anyhow::Result<Command> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);

        if !line.starts_with(':') {
            return Ok(Command::Query(line.to_string()));
        }

        let mut words = line[1..].split_whitespace();
        let name = words.next().unwrap_or_default();
        let index = words.next().map(str::parse::<usize>).transpose()?;

        let command = match (name, index) {
            ("fav", Some(index)) => Command::Favorite(index),
            ("show", Some(index)) => Command::Show(index),
            ("unfav", Some(index)) => Command::Unfavorite(index),
            ("favs", None) => Command::Favorites,
            ("quit", None) | ("q", None) => Command::Quit,
            _ => {
                return Err(anyhow::Error::msg(format!(
                    "Unknown command {:?} (try :fav N, :show N, :favs, :unfav N, :quit)",
                    line
                )))
            }
        };

        Ok(command)
    }
}
