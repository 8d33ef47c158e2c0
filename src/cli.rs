//! 控制台命令解析
//! 把一行输入解析为应用消息

use thiserror::Error;

use crate::{
    app::Message,
    controller::{EntityKind, ListMessage},
    models::{CreateUserRequest, PageLimit},
};

/// 控制台命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Message),
    /// 重新打印当前页
    Print,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument <{argument}> for `{command}`")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Not a page number: {0}")]
    InvalidNumber(String),

    #[error("Unsupported page size: {0}")]
    UnsupportedLimit(u32),
}

pub const HELP: &str = "\
Commands:
  users | roles               switch page
  search [TEXT]               filter the current page (empty clears)
  page N | first | prev | next | last
  limit N                     page size: 10 20 50 100 500 1000 5000 10000
  delete ID                   delete a row on the current page
  reset                       regenerate the dataset
  refresh | show
  add-user EMAIL NAME...
  edit-user ID EMAIL NAME...
  delete-permission ID
  help | quit";

fn required<'a>(
    value: Option<&'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(CommandError::MissingArgument { command, argument })
}

fn number(value: &str) -> Result<u32, CommandError> {
    value
        .parse::<u32>()
        .map_err(|_| CommandError::InvalidNumber(value.to_string()))
}

/// 解析一行输入；列表操作作用于当前页 `active`
pub fn parse_command(line: &str, active: EntityKind) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let list = |message: ListMessage| -> Result<Command, CommandError> {
        Ok(Command::Dispatch(Message::List {
            target: active,
            message,
        }))
    };

    match word {
        "" => Err(CommandError::Empty),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "show" => Ok(Command::Print),
        "users" => Ok(Command::Dispatch(Message::Show(EntityKind::Users))),
        "roles" => Ok(Command::Dispatch(Message::Show(EntityKind::Roles))),
        "refresh" => list(ListMessage::Refresh),
        "search" => list(ListMessage::Search(rest.to_string())),
        "page" => {
            let page = number(required(Some(rest), "page", "N")?)?;
            list(ListMessage::GoToPage(page))
        }
        "first" => list(ListMessage::FirstPage),
        "prev" => list(ListMessage::PrevPage),
        "next" => list(ListMessage::NextPage),
        "last" => list(ListMessage::LastPage),
        "limit" => {
            let value = number(required(Some(rest), "limit", "N")?)?;
            let limit =
                PageLimit::try_from(value).map_err(|e| CommandError::UnsupportedLimit(e.0))?;
            list(ListMessage::SetLimit(limit))
        }
        "delete" => {
            let id = required(Some(rest), "delete", "ID")?;
            list(ListMessage::Delete(id.to_string()))
        }
        "reset" => list(ListMessage::Reset),
        "add-user" => {
            let (email, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let email = required(Some(email), "add-user", "EMAIL")?;
            let name = required(Some(name.trim()), "add-user", "NAME")?;
            Ok(Command::Dispatch(Message::AddUser(CreateUserRequest {
                name: name.to_string(),
                email: email.to_string(),
                roles: Vec::new(),
            })))
        }
        "edit-user" => {
            let mut parts = rest.splitn(3, char::is_whitespace);
            let id = required(parts.next(), "edit-user", "ID")?;
            let email = required(parts.next(), "edit-user", "EMAIL")?;
            let name = required(parts.next().map(str::trim), "edit-user", "NAME")?;
            Ok(Command::Dispatch(Message::EditUser {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
            }))
        }
        "delete-permission" => {
            let id = required(Some(rest), "delete-permission", "ID")?;
            Ok(Command::Dispatch(Message::DeletePermission(id.to_string())))
        }
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(target: EntityKind, message: ListMessage) -> Command {
        Command::Dispatch(Message::List { target, message })
    }

    #[test]
    fn test_list_commands_target_active_page() {
        assert_eq!(
            parse_command("search  John Smith ", EntityKind::Users),
            Ok(list(EntityKind::Users, ListMessage::Search("John Smith".to_string())))
        );
        assert_eq!(
            parse_command("search", EntityKind::Roles),
            Ok(list(EntityKind::Roles, ListMessage::Search(String::new())))
        );
        assert_eq!(
            parse_command("page 4", EntityKind::Roles),
            Ok(list(EntityKind::Roles, ListMessage::GoToPage(4)))
        );
        assert_eq!(
            parse_command("next", EntityKind::Users),
            Ok(list(EntityKind::Users, ListMessage::NextPage))
        );
        assert_eq!(
            parse_command("delete abc-123", EntityKind::Users),
            Ok(list(EntityKind::Users, ListMessage::Delete("abc-123".to_string())))
        );
    }

    #[test]
    fn test_limit_must_be_offered_size() {
        assert_eq!(
            parse_command("limit 50", EntityKind::Users),
            Ok(list(
                EntityKind::Users,
                ListMessage::SetLimit(PageLimit::try_from(50).unwrap())
            ))
        );
        assert_eq!(
            parse_command("limit 15", EntityKind::Users),
            Err(CommandError::UnsupportedLimit(15))
        );
        assert_eq!(
            parse_command("limit ten", EntityKind::Users),
            Err(CommandError::InvalidNumber("ten".to_string()))
        );
    }

    #[test]
    fn test_user_commands() {
        assert_eq!(
            parse_command("add-user ann@x.com Ann Lee", EntityKind::Roles),
            Ok(Command::Dispatch(Message::AddUser(CreateUserRequest {
                name: "Ann Lee".to_string(),
                email: "ann@x.com".to_string(),
                roles: vec![],
            })))
        );
        assert_eq!(
            parse_command("edit-user u1 ann@y.com Ann B Lee", EntityKind::Users),
            Ok(Command::Dispatch(Message::EditUser {
                id: "u1".to_string(),
                name: "Ann B Lee".to_string(),
                email: "ann@y.com".to_string(),
            }))
        );
        assert_eq!(
            parse_command("add-user ann@x.com", EntityKind::Users),
            Err(CommandError::MissingArgument {
                command: "add-user",
                argument: "NAME"
            })
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_command("   ", EntityKind::Users), Err(CommandError::Empty));
        assert_eq!(
            parse_command("frobnicate", EntityKind::Users),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
        assert_eq!(
            parse_command("delete", EntityKind::Users),
            Err(CommandError::MissingArgument {
                command: "delete",
                argument: "ID"
            })
        );
    }
}
