//! Prompt templates for the ODE relay
//!
//! The equation and initial conditions are interpolated verbatim; nothing
//! here parses or checks them.

use crate::llm_client::ChatMessage;

/// System-role instruction sent with every request.
pub const SYSTEM_PROMPT: &str = "Eres un asistente experto en matemáticas y ecuaciones diferenciales. \
Tu única tarea es resolver ecuaciones diferenciales y proporcionar los pasos detallados de la solución. \
Evita cualquier saludo, despedida, introducción o conclusión. Solo la solución paso a paso.";

const CONSTANTS_WITH_CONDITIONS: &str = " Proporciona la solución particular y calcula las constantes \
de integración (C1, C2, o las que sean necesarias) basándote en la ecuación proporcionada y estas \
condiciones iniciales.";

const CONSTANTS_FROM_EQUATION: &str = " Proporciona la solución particular y calcula las constantes \
de integración (C1, C2, o las que sean necesarias) usando únicamente la ecuación proporcionada.";

const STEPS_ONLY: &str = " Proporciona únicamente los pasos detallados de la solución, explicando \
cada uno de forma clara y concisa, sin saludos ni texto introductorio o conclusivo.";

/// Build the user-role prompt for `equation`.
///
/// With initial conditions the model is told to use them (joined by ", ")
/// when computing the integration constants; without them it is told to
/// work from the equation alone.
pub fn build_user_prompt(equation: &str, initial_conditions: &[String]) -> String {
    let mut prompt = format!(
        "Resuelve la siguiente ecuación diferencial ordinaria: {}.",
        equation
    );

    if initial_conditions.is_empty() {
        prompt.push_str(CONSTANTS_FROM_EQUATION);
    } else {
        prompt.push_str(&format!(
            " Usa las siguientes condiciones iniciales: {}.",
            initial_conditions.join(", ")
        ));
        prompt.push_str(CONSTANTS_WITH_CONDITIONS);
    }

    prompt.push_str(STEPS_ONLY);
    prompt
}

/// The system + user conversation sent upstream.
pub fn build_messages(equation: &str, initial_conditions: &[String]) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(&build_user_prompt(equation, initial_conditions)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_without_conditions() {
        let prompt = build_user_prompt("y' = 2y", &[]);

        assert!(prompt.starts_with("Resuelve la siguiente ecuación diferencial ordinaria: y' = 2y."));
        assert!(prompt.contains(
            "calcula las constantes de integración (C1, C2, o las que sean necesarias) \
             usando únicamente la ecuación proporcionada."
        ));
        assert!(!prompt.contains("condiciones iniciales:"));
        assert!(prompt.ends_with("sin saludos ni texto introductorio o conclusivo."));
    }

    #[test]
    fn test_prompt_with_conditions() {
        let conditions = vec!["y(0)=1".to_string(), "y'(0)=0".to_string()];
        let prompt = build_user_prompt("y'' + y = 0", &conditions);

        assert!(prompt.contains("y'' + y = 0"));
        assert!(prompt.contains("Usa las siguientes condiciones iniciales: y(0)=1, y'(0)=0."));
        assert!(prompt.contains("basándote en la ecuación proporcionada y estas condiciones iniciales"));
        assert!(!prompt.contains("únicamente la ecuación proporcionada"));
    }

    #[test]
    fn test_prompt_single_condition() {
        let prompt = build_user_prompt("y' = -y", &["y(0)=3".to_string()]);
        assert!(prompt.contains("condiciones iniciales: y(0)=3."));
    }

    #[test]
    fn test_prompt_keeps_equation_verbatim() {
        let equation = "  dy/dx = x*y  ";
        let prompt = build_user_prompt(equation, &[]);
        assert!(prompt.contains("ordinaria:   dy/dx = x*y  ."));
    }

    #[test]
    fn test_build_messages_order() {
        let messages = build_messages("y' = y", &[]);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.contains("y' = y"));
    }
}
