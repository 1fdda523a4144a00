use actix_web::{http::StatusCode, HttpResponse};
use serde_derive::Serialize;

/// `{"message": "..."}`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MessageBody {
    pub message: String,
}

/// Builds bare JSON responses: a single item, a list, or a message.
pub struct JsonResponse<T> {
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> Self {
        Self {
            item: None,
            list: None,
        }
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub fn ok(self) -> HttpResponse {
        self.respond(StatusCode::OK)
    }

    pub fn created(self) -> HttpResponse {
        self.respond(StatusCode::CREATED)
    }

    fn respond(self, status: StatusCode) -> HttpResponse {
        let mut builder = HttpResponse::build(status);
        match (self.item, self.list) {
            (Some(item), _) => builder.json(item),
            (None, Some(list)) => builder.json(list),
            (None, None) => builder.json(serde_json::Value::Null),
        }
    }
}

impl JsonResponse<MessageBody> {
    pub fn message(message: impl Into<String>) -> Self {
        Self::build().set_item(MessageBody {
            message: message.into(),
        })
    }
}
