use clap::Parser;
use newsdesk::application::{init, AuthorService, EditNewsRequest, NewsService};
use newsdesk::cli::{
    format_author_list, format_news_item, format_news_list, AuthorCommands, Cli, Commands,
    NewsCommands,
};
use newsdesk::error::NewsdeskError;
use newsdesk::infrastructure::Workspace;
use std::sync::Arc;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), NewsdeskError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Author { command } => {
            let workspace = Workspace::discover()?;
            let service = author_service(&workspace)?;
            run_author(&service, command)
        }
        Commands::News { command } => {
            let workspace = Workspace::discover()?;
            let authors = author_service(&workspace)?;
            let service = NewsService::new(workspace.news_repository()?, authors);
            run_news(&service, command)
        }
    }
}

fn author_service(workspace: &Workspace) -> Result<AuthorService, NewsdeskError> {
    Ok(AuthorService::new(Arc::new(workspace.author_repository()?)))
}

fn run_author(service: &AuthorService, command: AuthorCommands) -> Result<(), NewsdeskError> {
    match command {
        AuthorCommands::Add { name } => {
            let author = service.create(Some(name))?;
            println!("Added author {} (id {})", author.name, author.id);
            Ok(())
        }
        AuthorCommands::List => {
            let authors = service.read_all();
            print!("{}", pad_list(format_author_list(&authors)));
            Ok(())
        }
        AuthorCommands::Remove { id } => {
            service.delete_by_id(Some(id))?;
            println!("Removed author {}", id);
            Ok(())
        }
    }
}

fn run_news(service: &NewsService, command: NewsCommands) -> Result<(), NewsdeskError> {
    match command {
        NewsCommands::Add {
            title,
            content,
            author,
        } => {
            let request = EditNewsRequest::new(title, content, Some(author));
            let item = service.create(Some(request))?;
            println!("Added news {} (id {})", item.title, item.id);
            Ok(())
        }
        NewsCommands::Update {
            id,
            title,
            content,
            author,
        } => {
            let request = EditNewsRequest::new(title, content, Some(author));
            let item = service.update(Some(id), Some(request))?;
            println!("Updated news {} (id {})", item.title, item.id);
            Ok(())
        }
        NewsCommands::Show { id } => {
            let item = service.read_by_id(Some(id))?;
            print!("{}", format_news_item(&item));
            Ok(())
        }
        NewsCommands::List { offset, limit } => {
            let items = service.read_page(offset, limit)?;
            print!("{}", pad_list(format_news_list(&items)));
            Ok(())
        }
        NewsCommands::Remove { id } => {
            service.delete_by_id(Some(id))?;
            println!("Removed news {}", id);
            Ok(())
        }
        NewsCommands::Count => {
            println!("{}", service.count());
            Ok(())
        }
    }
}

// "No authors found" style messages carry no trailing newline.
fn pad_list(formatted: String) -> String {
    if formatted.ends_with('\n') {
        formatted
    } else {
        format!("{}\n", formatted)
    }
}
