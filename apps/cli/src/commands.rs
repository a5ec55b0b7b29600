//! # Commands
//!
//! Argument parsing and the handler behind each command. Handlers return
//! the text to print so they can be tested without capturing stdout.
//!
//! ```text
//! argv ──► Command::parse ──► execute(cmd, config, books) ──► String
//! ```

use bookshop_core::catalog::{
    get_all_book_details, get_all_books, get_all_by_author, get_book_details, net_price,
};
use bookshop_core::payment::{buy_book, pay};
use bookshop_core::{new_id, Book, BookMap, Catalog, CoreError};
use tracing::info;

use crate::config::ShopConfig;
use crate::error::{CliError, CliResult};

pub const USAGE: &str = "\
Usage: bookshop <command>

Commands:
  list                 All books, sorted by title
  titles               Titles in catalog order
  authors              Unique authors
  by-author <name>     IDs of books by an author
  details <id>         Summary of one book
  price <id>           List and sale price of one book
  buy <id>             Buy one book at its sale price
  new-id               Generate a fresh identifier
  help                 This message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Titles,
    Authors,
    ByAuthor(String),
    Details(String),
    Price(String),
    Buy(String),
    NewId,
    Help,
}

impl Command {
    /// Parses arguments, excluding the program name.
    pub fn parse(args: &[String]) -> CliResult<Self> {
        let Some(name) = args.first() else {
            return Ok(Command::Help);
        };

        let operand = |what: &str| -> CliResult<String> {
            args.get(1)
                .cloned()
                .ok_or_else(|| CliError::usage(format!("{name} requires <{what}>\n\n{USAGE}")))
        };

        let command = match name.as_str() {
            "list" => Command::List,
            "titles" => Command::Titles,
            "authors" => Command::Authors,
            "by-author" => Command::ByAuthor(operand("name")?),
            "details" => Command::Details(operand("id")?),
            "price" => Command::Price(operand("id")?),
            "buy" => Command::Buy(operand("id")?),
            "new-id" => Command::NewId,
            "help" | "-h" | "--help" => Command::Help,
            other => {
                return Err(CliError::usage(format!(
                    "unknown command: {other}\n\n{USAGE}"
                )))
            }
        };

        Ok(command)
    }
}

/// Runs one command against `books` and returns its output.
pub fn execute(command: &Command, config: &ShopConfig, books: &BookMap) -> CliResult<String> {
    let output = match command {
        Command::List => format!(
            "{}\n{}",
            config.shop_name,
            get_all_book_details(books).trim_end()
        ),
        Command::Titles => Catalog::from(get_all_books(books)).get_all_titles().join("\n"),
        Command::Authors => Catalog::from(get_all_books(books))
            .get_unique_authors()
            .join("\n"),
        Command::ByAuthor(author) => get_all_by_author(author, books).join("\n"),
        Command::Details(id) => get_book_details(id, books)?,
        Command::Price(id) => {
            let book = lookup(id, books)?;
            let sale = net_price(book, books)?;
            format!(
                "{}: {} (list {}, {}% off)",
                book.title,
                config.format_currency(sale),
                config.format_currency(book.price_cents),
                book.discount_percent()
            )
        }
        Command::Buy(id) => {
            let book = lookup(id, books)?;
            let price = net_price(book, books)?;
            if buy_book(&book.id, price, &pay)? {
                info!(book_id = %book.id, price_cents = price, "book sold");
                format!("Bought {} for {}", book.title, config.format_currency(price))
            } else {
                return Err(CoreError::payment_failed(&book.id, "payment declined").into());
            }
        }
        Command::NewId => new_id(),
        Command::Help => USAGE.to_string(),
    };

    Ok(output)
}

fn lookup<'a>(id: &str, books: &'a BookMap) -> CliResult<&'a Book> {
    books
        .get(id)
        .ok_or_else(|| CoreError::BookNotFound(id.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshop_core::seed::{seed_books, BOLEK_I_LOLEK, ZOSIA_SAMOSIA};
    use bookshop_core::validation::validate_uuid;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run(list: &[&str]) -> CliResult<String> {
        let command = Command::parse(&args(list))?;
        execute(&command, &ShopConfig::default(), &seed_books())
    }

    #[test]
    fn test_parse() {
        assert_eq!(Command::parse(&[]).unwrap(), Command::Help);
        assert_eq!(Command::parse(&args(&["list"])).unwrap(), Command::List);
        assert_eq!(
            Command::parse(&args(&["by-author", "Bolek"])).unwrap(),
            Command::ByAuthor("Bolek".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Command::parse(&args(&["details"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            Command::parse(&args(&["steal", "1"])),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn test_list() {
        let out = run(&["list"]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Bookshop");
        assert!(lines[1].starts_with("Title: Bolek i Lolek,"));
        assert!(lines[5].starts_with("Title: Zosia Samosia,"));
    }

    #[test]
    fn test_by_author() {
        assert_eq!(
            run(&["by-author", "Gienek"]).unwrap(),
            "1912abf7-3f26-4196-b062-011b81b255e9"
        );
        assert_eq!(run(&["by-author", "Nobody"]).unwrap(), "");
    }

    #[test]
    fn test_details() {
        let out = run(&["details", ZOSIA_SAMOSIA]).unwrap();
        assert!(out.contains("Authors: Papcio Chmiel, Zigmas Laurin"));

        let err = run(&["details", "missing"]).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_price() {
        assert_eq!(
            run(&["price", BOLEK_I_LOLEK]).unwrap(),
            "Bolek i Lolek: $16.00 (list $20.00, 20% off)"
        );
    }

    #[test]
    fn test_buy() {
        assert_eq!(
            run(&["buy", BOLEK_I_LOLEK]).unwrap(),
            "Bought Bolek i Lolek for $16.00"
        );
        assert!(run(&["buy", "missing"]).is_err());
    }

    #[test]
    fn test_authors_and_titles() {
        let authors = run(&["authors"]).unwrap();
        assert_eq!(authors.lines().next(), Some("Bolek"));
        assert_eq!(run(&["titles"]).unwrap().lines().count(), 5);
    }

    #[test]
    fn test_new_id() {
        assert!(validate_uuid(&run(&["new-id"]).unwrap()).is_ok());
    }
}
