//! Header labels for each logical field.

use serde::{Deserialize, Serialize};

use super::Field;

/// Maps every [`Field`] to the exact header label of its column.
///
/// Labels are compared byte for byte, so embedded line breaks and trailing
/// whitespace in the sheet's headings must be reproduced here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColumnMap {
    pub ticket_number: String,
    pub question_number: String,
    pub text: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub correct_answer: String,
    pub category: String,
    pub image_url: String,
    pub hint: String,
    pub video_url: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            ticket_number: "Номер билета".to_string(),
            question_number: "Номер вопроса\n(В билете)".to_string(),
            text: "Вопрос".to_string(),
            option1: "Вариант1".to_string(),
            option2: "Вариант2".to_string(),
            option3: "Вариант3".to_string(),
            option4: "Вариант4\n(Если варианта 4 нет,\n то не заполнять)".to_string(),
            correct_answer: "Правильный ответ".to_string(),
            category: "Тема вопроса\n".to_string(),
            image_url: "Картинка\n(Прямая ссылка на изображение с расширением .jpg, .png)"
                .to_string(),
            hint: "Подсказка".to_string(),
            video_url: "Ссылка на видеоразбор вопросов".to_string(),
        }
    }
}

impl ColumnMap {
    /// Header label configured for a field.
    pub fn label(&self, field: Field) -> &str {
        match field {
            Field::TicketNumber => &self.ticket_number,
            Field::QuestionNumber => &self.question_number,
            Field::Text => &self.text,
            Field::Option1 => &self.option1,
            Field::Option2 => &self.option2,
            Field::Option3 => &self.option3,
            Field::Option4 => &self.option4,
            Field::CorrectAnswer => &self.correct_answer,
            Field::Category => &self.category,
            Field::ImageUrl => &self.image_url,
            Field::Hint => &self.hint,
            Field::VideoUrl => &self.video_url,
        }
    }

    /// `(field, label)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.label(f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels_keep_line_breaks() {
        let columns = ColumnMap::default();
        assert_eq!(columns.label(Field::QuestionNumber), "Номер вопроса\n(В билете)");
        assert!(columns.label(Field::Category).ends_with('\n'));
        assert_eq!(columns.iter().count(), Field::ALL.len());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let toml = r#"
ticket_number = "Ticket"
text = "Question"
"#;
        let columns: ColumnMap = toml::from_str(toml).unwrap();
        assert_eq!(columns.label(Field::TicketNumber), "Ticket");
        assert_eq!(columns.label(Field::Text), "Question");
        assert_eq!(columns.label(Field::Hint), "Подсказка");
    }
}
