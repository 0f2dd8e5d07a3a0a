extern crate shelfscout;

use std::sync::Arc;

use log::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use shelfscout::catalog::OpenLibrary;
use shelfscout::shell::Command;
use shelfscout::{details, render};
use shelfscout::{Config, FavoritesStore, SearchController, SearchHandle};

struct Shell {
    config: Config,
    catalog: Arc<OpenLibrary>,
    favorites: FavoritesStore,
    search: SearchHandle,
}

impl Shell {
    fn print_view(&self) {
        println!(
            "{}",
            render::search_view(&self.config, &self.favorites, &self.search.view())
        );
    }

    async fn print_favorites(&self) {
        let page =
            details::favorites_page(&self.config, Arc::clone(&self.catalog), &self.favorites).await;

        println!("{}", page);
    }

    async fn run(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Query(query) => self.search.set_query(query).await?,
            Command::Favorite(index) => match self.search.view().books().get(index) {
                Some(book) => {
                    self.favorites.toggle(book);
                    self.print_view();
                }
                None => println!("No book at {}", index),
            },
            Command::Show(index) => {
                let book = match self.search.view().books().get(index) {
                    Some(book) => book.clone(),
                    None => {
                        println!("No book at {}", index);
                        return Ok(());
                    }
                };

                let description = details::load_description(self.catalog.as_ref(), &book).await;

                println!(
                    "{}",
                    render::detail(&self.config, &self.favorites, &book, Some(&description))
                );
            }
            Command::Favorites => self.print_favorites().await,
            Command::Unfavorite(index) => match self.favorites.get(index).cloned() {
                Some(book) => {
                    self.favorites.toggle(&book);
                    self.print_favorites().await;
                }
                None => println!("No favorite at {}", index),
            },
            Command::Quit => {}
        }

        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::default();
    let catalog = Arc::new(OpenLibrary::new(config.clone())?);
    let search = SearchController::new(Arc::clone(&catalog), config.clone()).spawn();

    let mut shell = Shell {
        config,
        catalog,
        favorites: FavoritesStore::new(),
        search,
    };

    info!("type to search; :fav N, :show N, :favs, :unfav N, :quit");
    shell.print_view();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line? {
                    Some(line) => line,
                    None => break,
                };

                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => shell.run(command).await?,
                    Err(err) => error!("{}", err),
                }
            }
            view = shell.search.changed() => {
                view?;
                shell.print_view();
            }
        }
    }

    shell.search.shutdown().await;

    Ok(())
}
