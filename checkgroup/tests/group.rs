use checkgroup::prelude::*;

fn sel(values: &[&str]) -> SelectionCollection {
    values.iter().copied().collect()
}

fn mounted(config: GroupConfig) -> CheckboxGroup {
    let mut group = CheckboxGroup::new(config);
    group.mount();
    group
}

fn three() -> GroupConfig {
    GroupConfig::new().options(["one", "two", "three"])
}

// ============================================================================
// Structure, classes and attributes
// ============================================================================

#[test]
fn test_default_renders_empty_div() {
    let el = CheckboxGroup::new(GroupConfig::new()).render();
    assert_eq!(el.tag, "div");
    assert!(el.elements().is_empty());
}

#[test]
fn test_default_has_only_focus_ring_class() {
    let el = CheckboxGroup::new(GroupConfig::new()).render();
    assert_eq!(el.classes, vec!["bv-no-focus-ring"]);
}

#[test]
fn test_auto_id_only_after_mount() {
    let mut group = CheckboxGroup::new(GroupConfig::new());
    assert!(group.render().id.is_none());

    group.mount();
    let id = group.render().id;
    assert!(id.is_some());

    // Stable across renders
    assert_eq!(group.render().id, id);
}

#[test]
fn test_auto_ids_differ_between_groups() {
    let a = mounted(GroupConfig::new());
    let b = mounted(GroupConfig::new());
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_remount_generates_fresh_id() {
    let mut group = mounted(GroupConfig::new());
    assert!(group.is_mounted());
    let first = group.id();
    group.unmount();
    assert!(!group.is_mounted());
    assert!(group.id().is_none());
    group.mount();
    assert!(group.is_mounted());
    assert_ne!(group.id(), first);
}

#[test]
fn test_tabindex_is_minus_one() {
    let el = CheckboxGroup::new(GroupConfig::new()).render();
    assert_eq!(el.attribute("tabindex"), Some("-1"));
}

#[test]
fn test_role_is_group() {
    let el = CheckboxGroup::new(GroupConfig::new()).render();
    assert_eq!(el.attribute("role"), Some("group"));
}

#[test]
fn test_no_aria_required_or_invalid_by_default() {
    let el = CheckboxGroup::new(GroupConfig::new()).render();
    assert!(!el.has_attribute("aria-required"));
    assert!(!el.has_attribute("aria-invalid"));
}

#[test]
fn test_container_never_has_aria_required() {
    let el = mounted(three().required().name("group")).render();
    assert!(!el.has_attribute("aria-required"));
}

#[test]
fn test_user_provided_id() {
    let group = CheckboxGroup::new(GroupConfig::new().id("test"));
    assert_eq!(group.render().id.as_deref(), Some("test"));

    let group = mounted(GroupConfig::new().id("test"));
    assert_eq!(group.render().id.as_deref(), Some("test"));
}

#[test]
fn test_was_validated_class() {
    let el = mounted(GroupConfig::new().validated()).render();
    assert!(el.has_class("was-validated"));
}

#[test]
fn test_aria_invalid_when_state_false() {
    let el = mounted(GroupConfig::new().state(false)).render();
    assert_eq!(el.attribute("aria-invalid"), Some("true"));
}

#[test]
fn test_no_aria_invalid_when_state_true_or_neutral() {
    let el = mounted(GroupConfig::new().state(true)).render();
    assert!(!el.has_attribute("aria-invalid"));

    let el = mounted(GroupConfig::new()).render();
    assert!(!el.has_attribute("aria-invalid"));
}

#[test]
fn test_aria_invalid_overrides() {
    for value in [AriaInvalid::from(true), "true".into(), "".into()] {
        let el = mounted(GroupConfig::new().aria_invalid(value.clone())).render();
        assert_eq!(el.attribute("aria-invalid"), Some("true"), "{value:?}");
    }
}

#[test]
fn test_aria_invalid_unknown_token_passes_through() {
    let el = CheckboxGroup::new(GroupConfig::new().aria_invalid("bogus")).render();
    assert_eq!(el.attribute("aria-invalid"), Some("bogus"));

    let el = CheckboxGroup::new(GroupConfig::new().aria_invalid("spelling")).render();
    assert_eq!(el.attribute("aria-invalid"), Some("spelling"));

    let el = CheckboxGroup::new(GroupConfig::new().aria_invalid("bogus").state(false)).render();
    assert_eq!(el.attribute("aria-invalid"), Some("true"));
}

// ============================================================================
// Button mode
// ============================================================================

#[test]
fn test_button_mode_classes() {
    let el = mounted(GroupConfig::new().buttons()).render();
    assert_eq!(el.classes, vec!["bv-no-focus-ring", "btn-group"]);
}

#[test]
fn test_button_mode_stacked_classes() {
    let el = mounted(GroupConfig::new().buttons().stacked()).render();
    assert_eq!(el.classes, vec!["bv-no-focus-ring", "btn-group-vertical"]);
}

#[test]
fn test_button_mode_size_class() {
    let el = mounted(GroupConfig::new().buttons().size(Size::Lg)).render();
    assert_eq!(el.classes.len(), 3);
    assert!(el.has_class("btn-group"));
    assert!(el.has_class("btn-group-lg"));
    assert!(el.has_class("bv-no-focus-ring"));
}

#[test]
fn test_button_mode_stacked_size_has_exactly_three_classes() {
    let el = mounted(GroupConfig::new().buttons().stacked().size(Size::Lg)).render();
    assert_eq!(
        el.classes,
        vec!["bv-no-focus-ring", "btn-group-vertical", "btn-group-lg"]
    );
}

#[test]
fn test_button_variants() {
    let group = mounted(
        GroupConfig::new()
            .buttons()
            .button_variant("primary")
            .options([
                RawOption::record("button 1").value("first"),
                RawOption::record("button 2").value("second"),
                RawOption::record("button 3")
                    .value("third")
                    .prop("buttonVariant", "danger"),
            ]),
    );

    let el = group.render();
    let buttons = el.select("label.btn").unwrap();
    assert_eq!(buttons.len(), 3);
    assert!(buttons[0].has_class("btn-primary"));
    assert!(buttons[1].has_class("btn-primary"));
    assert!(buttons[2].has_class("btn-danger"));
}

#[test]
fn test_button_default_variant_is_secondary() {
    let el = mounted(three().buttons()).render();
    for label in el.select("label.btn").unwrap() {
        assert!(label.has_class("btn-secondary"));
    }
}

#[test]
fn test_button_labels_reflect_checked_and_disabled() {
    let group = mounted(
        GroupConfig::new()
            .buttons()
            .size(Size::Sm)
            .options([RawOption::from("a"), RawOption::record("b").disabled()])
            .model_value(sel(&["a"])),
    );
    let el = group.render();
    let labels = el.select("label.btn").unwrap();
    assert!(labels[0].has_class("active"));
    assert!(labels[0].has_class("btn-sm"));
    assert!(!labels[0].has_class("disabled"));
    assert!(labels[1].has_class("disabled"));

    let inputs = el.select("input.btn-check").unwrap();
    assert_eq!(inputs.len(), 2);
}

#[test]
fn test_button_mode_has_no_form_check_wrappers() {
    let el = mounted(three().buttons()).render();
    assert!(el.select("div.form-check").unwrap().is_empty());
    assert_eq!(el.elements().len(), 6);
}

// ============================================================================
// Functionality
// ============================================================================

#[test]
fn test_checkboxes_from_options_array() {
    let group = mounted(three().model_value(sel(&[])));
    assert!(group.model_value().is_empty());
    assert_eq!(group.render().select("input[type=checkbox]").unwrap().len(), 3);
}

#[test]
fn test_options_respect_disabled() {
    let group = mounted(GroupConfig::new().options([
        RawOption::record("one"),
        RawOption::record("two"),
        RawOption::record("three").disabled(),
    ]));

    let el = group.render();
    let inputs = el.select("input[type=checkbox]").unwrap();
    assert_eq!(inputs.len(), 3);
    assert!(!inputs[0].has_attribute("disabled"));
    assert!(!inputs[1].has_attribute("disabled"));
    assert!(inputs[2].has_attribute("disabled"));
}

#[test]
fn test_click_script_emits_change_and_update() {
    let mut group = mounted(three());
    let emitted = group.record_events();
    let model = group.model();
    group.on_update_model_value(move |next| model.set(next.clone()));

    let script: [(usize, &[&str]); 4] = [
        (0, &["one"]),
        (2, &["one", "three"]),
        (0, &["three"]),
        (1, &["three", "two"]),
    ];

    for (step, (index, expected)) in script.iter().enumerate() {
        assert_eq!(group.click(*index).unwrap(), EventResult::Consumed);
        assert_eq!(group.model_value(), sel(expected));

        let changes = emitted.emitted(GroupEventKind::Change);
        let updates = emitted.emitted(GroupEventKind::UpdateModelValue);
        assert_eq!(changes.len(), step + 1);
        assert_eq!(updates.len(), step + 1);
        assert_eq!(changes[step], sel(expected));
        assert_eq!(updates[step], sel(expected));
    }
}

#[test]
fn test_unbound_group_does_not_write_model() {
    let mut group = mounted(three());
    let emitted = group.record_events();

    group.click(0).unwrap();
    assert!(group.model_value().is_empty());
    assert_eq!(emitted.emitted(GroupEventKind::Change), vec![sel(&["one"])]);

    // Without a binding the next click still starts from the controlled value.
    group.click(1).unwrap();
    assert_eq!(emitted.emitted(GroupEventKind::Change)[1], sel(&["two"]));
}

#[test]
fn test_bound_group_updates_model() {
    let mut group = mounted(three());
    let model = State::new(sel(&["two"]));
    assert!(!group.model().ptr_eq(&model));
    group.bind(model.clone());
    assert!(group.is_bound());
    assert!(group.model().ptr_eq(&model));

    group.click(0).unwrap();
    assert_eq!(model.get(), sel(&["two", "one"]));
    assert_eq!(group.model_value(), sel(&["two", "one"]));
}

#[test]
fn test_binding_applies_before_listeners() {
    let mut group = mounted(three());
    let model = group.model();
    group.bind(model.clone());

    let seen = State::new(Vec::new());
    let seen_handle = seen.clone();
    let model_handle = model.clone();
    group.on_change(move |_| seen_handle.set(vec![model_handle.get()]));

    group.click(1).unwrap();
    assert_eq!(seen.get(), vec![sel(&["two"])]);
}

#[test]
fn test_checkboxes_reflect_model_value() {
    let mut group = mounted(three().model_value(sel(&["two"])));

    let el = group.render();
    let inputs = el.select("input[type=checkbox]").unwrap();
    assert!(!inputs[0].has_attribute("checked"));
    assert!(inputs[1].has_attribute("checked"));
    assert!(!inputs[2].has_attribute("checked"));

    group.set_props(|props| props.model_value = sel(&["three", "one"]));
    assert_eq!(group.model_value(), sel(&["three", "one"]));

    let el = group.render();
    let inputs = el.select("input[type=checkbox]").unwrap();
    assert!(inputs[0].has_attribute("checked"));
    assert!(!inputs[1].has_attribute("checked"));
    assert!(inputs[2].has_attribute("checked"));
}

#[test]
fn test_children_valid_class_when_state_true() {
    let el = mounted(three().state(true)).render();
    let inputs = el.select("input[type=checkbox]").unwrap();
    assert_eq!(inputs.len(), 3);
    assert!(inputs.iter().all(|input| input.has_class("is-valid")));
}

#[test]
fn test_children_invalid_class_when_state_false() {
    let el = mounted(three().state(false)).render();
    let inputs = el.select("input[type=checkbox]").unwrap();
    assert!(inputs.iter().all(|input| input.has_class("is-invalid")));
}

#[test]
fn test_child_state_overrides_group_state() {
    let group = mounted(
        GroupConfig::new()
            .state(false)
            .options([RawOption::from("a"), RawOption::record("b").state(true)]),
    );
    let el = group.render();
    let inputs = el.select("input").unwrap();
    assert!(inputs[0].has_class("is-invalid"));
    assert!(inputs[1].has_class("is-valid"));
    assert!(!inputs[1].has_class("is-invalid"));
}

#[test]
fn test_children_disabled_when_group_disabled() {
    let el = mounted(three().disabled()).render();
    let inputs = el.select("input[type=checkbox]").unwrap();
    assert!(inputs.iter().all(|input| input.has_attribute("disabled")));
}

#[test]
fn test_disabled_child_ignores_click() {
    let mut group = mounted(three().disabled());
    let emitted = group.record_events();

    assert_eq!(group.click(0).unwrap(), EventResult::Ignored);
    assert_eq!(emitted.count(GroupEventKind::Change), 0);
    assert_eq!(emitted.count(GroupEventKind::UpdateModelValue), 0);
}

#[test]
fn test_click_unknown_index_errors() {
    let group = mounted(three());
    let err = group.click(7).unwrap_err();
    assert!(matches!(err, GroupError::UnknownOption { index: 7, len: 3 }));
}

#[test]
fn test_children_required_when_group_required_and_named() {
    let el = mounted(three().name("group").required()).render();
    let inputs = el.select("input[type=checkbox]").unwrap();
    assert_eq!(inputs.len(), 3);
    for input in inputs {
        assert!(input.has_attribute("required"));
        assert_eq!(input.attribute("aria-required"), Some("true"));
        assert_eq!(input.attribute("name"), Some("group"));
    }
}

#[test]
fn test_children_not_required_without_name() {
    let el = mounted(three().required()).render();
    for input in el.select("input[type=checkbox]").unwrap() {
        assert!(!input.has_attribute("required"));
        assert!(!input.has_attribute("aria-required"));
    }
}

#[test]
fn test_children_inline_when_not_stacked() {
    let el = mounted(three().name("group")).render();
    let wrappers = el.select("div.form-check").unwrap();
    assert_eq!(wrappers.len(), 3);
    assert!(wrappers.iter().all(|w| w.has_class("form-check-inline")));
}

#[test]
fn test_children_not_inline_when_stacked() {
    let el = mounted(three().name("group").stacked()).render();
    let wrappers = el.select("div.form-check").unwrap();
    assert_eq!(wrappers.len(), 3);
    assert!(wrappers.iter().all(|w| !w.has_class("form-check-inline")));
}

#[test]
fn test_switches_add_form_switch() {
    let el = mounted(three().switches()).render();
    assert_eq!(el.select("div.form-check.form-switch").unwrap().len(), 3);
}

#[test]
fn test_plain_drops_form_check_classes() {
    let el = mounted(three().plain().state(true)).render();
    assert!(el.select(".form-check").unwrap().is_empty());
    assert!(el.select(".form-check-input").unwrap().is_empty());
    assert!(el.select(".form-check-label").unwrap().is_empty());
    assert_eq!(el.select("input.is-valid").unwrap().len(), 3);
}

#[test]
fn test_form_attribute_propagates() {
    let el = mounted(three().form("signup")).render();
    for input in el.select("input").unwrap() {
        assert_eq!(input.attribute("form"), Some("signup"));
    }
}

#[test]
fn test_child_ids_and_labels_follow_group_id() {
    let el = mounted(three().id("g")).render();
    let inputs = el.select("input").unwrap();
    let labels = el.select("label").unwrap();
    assert_eq!(inputs[2].id.as_deref(), Some("g__BV_option_2"));
    assert_eq!(labels[2].attribute("for"), Some("g__BV_option_2"));
    assert_eq!(labels[2].text_content(), "three");
}

#[test]
fn test_child_ids_absent_before_mount() {
    let el = CheckboxGroup::new(three()).render();
    for input in el.select("input").unwrap() {
        assert!(input.id.is_none());
    }
}

#[test]
fn test_value_attribute_uses_option_value() {
    let group = mounted(GroupConfig::new().options([RawOption::record("Two").value(2i64)]));
    let el = group.render();
    let input = el.select("input").unwrap()[0];
    assert_eq!(input.attribute("value"), Some("2"));
}

// ============================================================================
// Context isolation and render tracking
// ============================================================================

#[test]
fn test_groups_do_not_share_state() {
    let mut a = mounted(three().disabled());
    let b = mounted(three().model_value(sel(&["one"])));
    let model = a.model();
    a.bind(model);
    a.set_props(|props| props.disabled = false);
    a.click(1).unwrap();

    assert_eq!(a.model_value(), sel(&["two"]));
    assert_eq!(b.model_value(), sel(&["one"]));
    assert!(b.checkboxes().iter().all(|cb| !cb.is_disabled()));
    assert!(!b.context().is_checked(&"two".into()));
}

#[test]
fn test_needs_render_tracks_changes() {
    let group = mounted(three());
    assert!(group.needs_render());
    group.render();
    assert!(!group.needs_render());

    group.set_model_value(sel(&["one"]));
    assert!(group.needs_render());
    group.render();
    assert!(!group.needs_render());
}

#[test]
fn test_set_props_renormalizes_options() {
    let mut group = mounted(three());
    group.set_props(|props| props.options = vec!["x".into(), "y".into()]);
    assert_eq!(group.options().len(), 2);
    assert_eq!(group.render().select("input").unwrap().len(), 2);
}

#[test]
fn test_toggle_returns_next_selection() {
    let group = mounted(three().model_value(sel(&["two"])));
    assert_eq!(group.toggle("one", true), sel(&["two", "one"]));
    assert_eq!(group.toggle("two", false), sel(&[]));
    // Values outside the option list are tolerated.
    assert_eq!(group.toggle("zzz", true), sel(&["two", "zzz"]));
}

#[test]
fn test_html_output() {
    let group = mounted(
        GroupConfig::new()
            .id("g")
            .name("n")
            .options(["a"])
            .model_value(sel(&["a"])),
    );
    let html = formdom::to_html(&group.render());
    assert_eq!(
        html,
        concat!(
            r#"<div id="g" class="bv-no-focus-ring" role="group" tabindex="-1">"#,
            r#"<div class="form-check form-check-inline">"#,
            r#"<input id="g__BV_option_0" class="form-check-input" type="checkbox" name="n" value="a" checked="">"#,
            r#"<label class="form-check-label" for="g__BV_option_0">a</label>"#,
            r#"</div></div>"#
        )
    );
}
