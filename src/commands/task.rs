use crate::db::backend::TaskBackend;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::task::{Category, Filter, TaskId};
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Category: work, personal or study
    #[arg(short, long, default_value = "work")]
    category: Category,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only one category (all, work, personal, study)
    #[arg(short, long)]
    filter: Option<Filter>,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    /// Task ID
    id: TaskId,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    id: TaskId,
    /// New title; prompted when omitted
    #[arg(short, long)]
    title: Option<String>,
    /// New category; prompted when neither title nor category is given
    #[arg(short, long)]
    category: Option<Category>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: TaskId,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

pub async fn add<B: TaskBackend>(store: &TaskStore<B>, args: AddArgs) -> Result<()> {
    match store.add(&args.title, args.category).await {
        Ok(Some(_)) => msg_success!(Message::TaskCreated(args.title.trim().to_string())),
        Ok(None) => msg_error!(Message::TaskRejected(args.title.trim().to_string())),
        // The prompt has already told the user what is wrong.
        Err(_) => {}
    }
    Ok(())
}

pub fn list<B: TaskBackend>(store: &TaskStore<B>, args: ListArgs) -> Result<()> {
    match args.filter {
        Some(filter) => store.set_filter(filter),
        None => store.render(),
    }
    Ok(())
}

pub async fn toggle<B: TaskBackend>(store: &TaskStore<B>, args: IdArgs) -> Result<()> {
    let title = store.get(&args.id).map(|task| task.title).unwrap_or_default();
    match store.toggle(&args.id).await {
        Some(true) => msg_success!(Message::TaskCompleted(title)),
        Some(false) => msg_info!(Message::TaskReopened(title)),
        None => msg_error!(Message::TaskNotFound(args.id.to_string())),
    }
    Ok(())
}

pub async fn edit<B: TaskBackend>(store: &TaskStore<B>, args: EditArgs) -> Result<()> {
    let Some(task) = store.begin_edit(&args.id) else {
        match store.get(&args.id) {
            Some(task) => msg_error!(Message::AlreadyEditing(task.title)),
            None => msg_error!(Message::TaskNotFound(args.id.to_string())),
        }
        return Ok(());
    };
    msg_print!(Message::EditingTask(task.title.clone()), true);

    let category = match (args.category, &args.title) {
        (Some(category), _) => category,
        (None, Some(_)) => task.category,
        (None, None) => match prompt_category(task.category) {
            Ok(category) => category,
            Err(_) => return cancel(store, &args.id),
        },
    };

    let mut title = args.title;
    loop {
        let candidate = match title.take() {
            Some(title) => title,
            None => match prompt_title(&task.title) {
                Ok(title) => title,
                Err(_) => return cancel(store, &args.id),
            },
        };

        match store.edit(&args.id, &candidate, category).await {
            Ok(true) => {
                msg_success!(Message::TaskUpdated(candidate.trim().to_string()));
                return Ok(());
            }
            Ok(false) => {
                msg_error!(Message::TaskNotFound(args.id.to_string()));
                return Ok(());
            }
            // The session stays open; ask again.
            Err(_) => continue,
        }
    }
}

pub async fn delete<B: TaskBackend>(store: &TaskStore<B>, args: DeleteArgs) -> Result<()> {
    let Some(task) = store.get(&args.id) else {
        msg_error!(Message::TaskNotFound(args.id.to_string()));
        return Ok(());
    };

    if store.remove(&args.id).await {
        msg_success!(Message::TaskDeleted(task.title));
    } else if store.get(&args.id).is_some() {
        msg_info!(Message::DeleteCancelled);
    }
    Ok(())
}

fn cancel<B: TaskBackend>(store: &TaskStore<B>, id: &TaskId) -> Result<()> {
    store.cancel_edit(id);
    msg_info!(Message::EditCancelled);
    Ok(())
}

fn prompt_title(current: &str) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(current.to_string())
        .allow_empty(true)
        .interact_text()?)
}

fn prompt_category(current: Category) -> Result<Category> {
    let labels: Vec<String> = Category::ALL.iter().map(|c| format!("{} ({})", c, c.label())).collect();
    let default = Category::ALL.iter().position(|c| *c == current).unwrap_or(0);
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCategory.to_string())
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(Category::ALL[choice])
}
