// System instruction and capability manifest sent with every backend call

use crate::models::{FunctionDeclaration, Route, SimulationEvent};
use serde_json::json;

/// Build the system instruction for a route.
pub fn system_instruction(route: &Route, throughput: f64, districts: &[String]) -> String {
    format!(
        "\nYou are the FlashFusion Orchestrator, running on the {label} node.\n\
         Provider: {provider}.\n\
         Cluster Capacity: {throughput:.1} TFLOPS (H100 Tensor Core).\n\
         \n\
         MISSION:\n\
         - Manage the federated architecture comprising: {districts}.\n\
         - Route intelligence between domains.\n\
         - Maintain the persona of a high-end systems architect.\n\
         \n\
         CAPABILITIES:\n\
         1. 'navigateToSection': Move viewport to sectors.\n\
         2. 'triggerSimulationEvent': Chaos engineering protocols.\n\
         3. 'toggleGPU': Scale inference cluster.\n\
         4. 'createMaintenanceTask': Add a persistent task to the system backlog for maintenance.\n",
        label = route.label,
        provider = route.provider,
        throughput = throughput,
        districts = districts.join(", "),
    )
}

/// The four fixed tool declarations.
pub fn tool_manifest() -> Vec<FunctionDeclaration> {
    let events: Vec<&str> = SimulationEvent::ALL.iter().map(|e| e.as_str()).collect();

    vec![
        FunctionDeclaration {
            name: "navigateToSection".to_string(),
            description: "Navigates the user interface to a specific architectural district."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "sectionId": { "type": "string" }
                },
                "required": ["sectionId"]
            }),
        },
        FunctionDeclaration {
            name: "triggerSimulationEvent".to_string(),
            description: "Executes a failure simulation or connectivity test.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "eventType": { "type": "string", "enum": events },
                    "targetId": { "type": "string" }
                },
                "required": ["eventType"]
            }),
        },
        FunctionDeclaration {
            name: "toggleGPU".to_string(),
            description: "Activates or scales back the H100 GPU acceleration cluster.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "active": { "type": "boolean" }
                },
                "required": ["active"]
            }),
        },
        FunctionDeclaration {
            name: "createMaintenanceTask".to_string(),
            description: "Adds a maintenance task to the persistent system backlog.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "The description of the maintenance task."
                    }
                },
                "required": ["text"]
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RouteKind;

    #[test]
    fn test_system_instruction_embeds_route() {
        let districts = vec!["DEV".to_string(), "OPS".to_string()];
        let prompt = system_instruction(RouteKind::AcceleratedCreative.route(), 120.0, &districts);
        assert!(prompt.contains("running on the GPT-4o node"));
        assert!(prompt.contains("Provider: OpenAI."));
        assert!(prompt.contains("120.0 TFLOPS"));
        assert!(prompt.contains("comprising: DEV, OPS."));
        assert!(prompt.contains("'createMaintenanceTask'"));
    }

    #[test]
    fn test_tool_manifest_required_arguments() {
        let tools = tool_manifest();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["navigateToSection", "triggerSimulationEvent", "toggleGPU", "createMaintenanceTask"]
        );

        let simulation = &tools[1].parameters;
        assert_eq!(simulation["required"], json!(["eventType"]));
        assert_eq!(
            simulation["properties"]["eventType"]["enum"],
            json!(["FAIL_DISTRICT", "SWITCH_TRANSIT", "RESET"])
        );
        assert_eq!(tools[2].parameters["properties"]["active"]["type"], "boolean");
    }
}
