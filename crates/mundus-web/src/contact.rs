//! Contact form wiring: collect fields, validate, POST, surface the state.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use mundus_core::contact::{ContactForm, SubmitState};

use crate::constants::{
    CONTACT_ENDPOINT, CONTACT_FIELD_IDS, CONTACT_FORM_ID, CONTACT_STATUS_ID, CONTACT_SUBMIT_ID,
};
use crate::dom;
use crate::lifecycle::Lifecycle;

fn field_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn collect_form(document: &web::Document) -> ContactForm {
    let [first_name, last_name, company, position, phone, email, message] =
        CONTACT_FIELD_IDS.map(|id| field_value(document, id));
    ContactForm {
        first_name,
        last_name,
        company,
        position,
        phone,
        email,
        message,
    }
}

fn set_status(document: &web::Document, state: &str) {
    if let Some(el) = document.get_element_by_id(CONTACT_STATUS_ID) {
        _ = el.set_attribute("data-state", state);
    }
    if let Some(button) = document.get_element_by_id(CONTACT_SUBMIT_ID) {
        if state == "sending" {
            _ = button.set_attribute("disabled", "");
        } else {
            _ = button.remove_attribute("disabled");
        }
    }
}

fn status_name(state: SubmitState) -> &'static str {
    match state {
        SubmitState::Idle => "idle",
        SubmitState::Sending => "sending",
        SubmitState::Success => "success",
        SubmitState::Error => "error",
    }
}

fn payload_json(form: &ContactForm) -> Result<JsValue, JsValue> {
    let body = js_sys::Object::new();
    for (key, value) in [
        ("firstName", &form.first_name),
        ("lastName", &form.last_name),
        ("company", &form.company),
        ("position", &form.position),
        ("phone", &form.phone),
        ("email", &form.email),
        ("message", &form.message),
    ] {
        Reflect::set(&body, &JsValue::from_str(key), &JsValue::from_str(value))?;
    }
    let json = js_sys::JSON::stringify(&body)?;
    Ok(json.into())
}

async fn submit(form: ContactForm) -> Result<(), JsValue> {
    let opts = web::RequestInit::new();
    opts.set_method("POST");
    let headers = web::Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    opts.set_headers(&headers.into());
    opts.set_body(&payload_json(&form)?);

    let request = web::Request::new_with_str_and_init(CONTACT_ENDPOINT, &opts)?;
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if response.ok() {
        Ok(())
    } else {
        Err(JsValue::from_str("submission rejected"))
    }
}

pub fn wire_contact(lifecycle: &mut Lifecycle) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(form_el) = document.get_element_by_id(CONTACT_FORM_ID) else {
        return;
    };

    let state = Rc::new(RefCell::new(SubmitState::Idle));

    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let Some(document) = dom::window_document() else {
            return;
        };
        let form = collect_form(&document);
        if let Err(e) = form.validate() {
            log::info!("[contact] rejected: {e}");
            set_status(&document, "error");
            return;
        }
        if !state.borrow_mut().begin() {
            return; // already in flight
        }
        set_status(&document, status_name(SubmitState::Sending));

        let state = state.clone();
        spawn_local(async move {
            let ok = match submit(form).await {
                Ok(()) => true,
                Err(e) => {
                    log::error!("[contact] submit failed: {e:?}");
                    false
                }
            };
            let mut st = state.borrow_mut();
            st.finish(ok);
            if let Some(document) = dom::window_document() {
                set_status(&document, status_name(*st));
            }
        });
    }) as Box<dyn FnMut(_)>);
    lifecycle.listen(form_el.as_ref(), "submit", closure);
}
