use entity::{admin, event, member, tournament_log};
use sea_orm::ActiveValue::Set;
use sea_orm::NotSet;

use super::*;

impl From<member::Model> for Member {
    fn from(model: member::Model) -> Self {
        Self {
            id: model.club_id,
            name: model.name,
            eng_name: model.eng_name,
            sex: model.sex.into(),
            handicap: model.handicap,
            is_new: model.is_new,
        }
    }
}

impl From<member::Model> for MemberRef {
    fn from(model: member::Model) -> Self {
        Self {
            key: model.id,
            club_id: model.club_id,
            name: model.name,
            eng_name: model.eng_name,
            sex: model.sex.into(),
            handicap: model.handicap,
            is_new: model.is_new,
        }
    }
}

impl From<event::Model> for EventSummary {
    fn from(model: event::Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            is_tourn: model.is_tourn,
        }
    }
}

impl From<tournament_log::Model> for LogEntry {
    fn from(model: tournament_log::Model) -> Self {
        Self {
            id: model.id,
            message: model.message,
            event_date: model.event_date,
            created_at: model.created_at,
        }
    }
}

impl CreateMember {
    pub(super) fn into_active_model(self) -> Result<member::ActiveModel, GenericError> {
        let handicap = check_handicap(self.handicap)?;
        check_identity(self.id, &self.name)?;
        Ok(member::ActiveModel {
            id: NotSet,
            club_id: Set(self.id),
            name: Set(self.name),
            eng_name: Set(self.eng_name),
            sex: Set(self.sex.into()),
            handicap: Set(vec![handicap]),
            is_new: Set(self.is_new),
        })
    }
}

impl UpdateMember {
    /// Applies the update on top of `existing`, or builds a new row.
    pub(super) fn into_active_model(
        self,
        existing: Option<member::Model>,
    ) -> Result<member::ActiveModel, GenericError> {
        for handicap in &self.handicap {
            check_handicap(*handicap)?;
        }
        check_identity(self.id, &self.name)?;
        let mut active = match existing {
            Some(model) => member::ActiveModel::from(model),
            None => member::ActiveModel {
                id: NotSet,
                club_id: Set(self.id),
                ..Default::default()
            },
        };
        active.name = Set(self.name);
        active.eng_name = Set(self.eng_name);
        active.sex = Set(self.sex.into());
        active.handicap = Set(self.handicap);
        active.is_new = Set(self.is_new);
        Ok(active)
    }
}

impl RegisterAdmin {
    pub(super) fn active_admin(&self, hashed_password: String) -> admin::ActiveModel {
        admin::ActiveModel {
            id: NotSet,
            username: Set(self.username.trim().to_string()),
            email: Set(self.email.trim().to_lowercase()),
            hashed_password: Set(hashed_password),
        }
    }
}

fn check_identity(club_id: i32, name: &str) -> Result<(), GenericError> {
    if club_id <= 0 {
        return Err(GenericError::BadRequest("Member id must be a positive number"));
    }
    if name.trim().is_empty() {
        return Err(GenericError::BadRequest("Member name is required"));
    }
    Ok(())
}
