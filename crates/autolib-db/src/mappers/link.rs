//! Link model <-> entity mapper

use autolib_core::Link;

use crate::models::LinkModel;

impl From<LinkModel> for Link {
    fn from(model: LinkModel) -> Self {
        Link {
            title: model.title,
            url: model.url,
        }
    }
}
