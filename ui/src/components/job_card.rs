use payloads::Job;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct JobCardProps {
    pub job: Job,
}

#[function_component]
pub fn JobCard(props: &JobCardProps) -> Html {
    let job = &props.job;
    let title = job.title().unwrap_or("Untitled position").to_string();

    html! {
        <li class="flex gap-4 p-4 border border-gray-200 dark:border-gray-700 rounded-lg">
            if let Some(logo) = job.company_logo() {
                <img src={logo.to_string()} alt="" class="h-12 w-12 object-contain flex-shrink-0" />
            }
            <div class="min-w-0 space-y-1">
                if let Some(url) = job.url() {
                    <a href={url.to_string()} target="_blank" rel="noopener noreferrer"
                        class="font-medium text-blue-600 hover:text-blue-500 dark:text-blue-400">
                        {title}
                    </a>
                } else {
                    <p class="font-medium">{title}</p>
                }
                <p class="text-sm text-gray-600 dark:text-gray-400">
                    {job.company().unwrap_or_default().to_string()}
                    if let Some(location) = job.location() {
                        {" · "}{location.to_string()}
                    }
                </p>
                <div class="flex gap-3 text-xs text-gray-500 dark:text-gray-400">
                    if let Some(job_type) = job.job_type() {
                        <span>{job_type.to_string()}</span>
                    }
                    if let Some(created_at) = job.created_at() {
                        <span>{created_at.to_string()}</span>
                    }
                </div>
            </div>
        </li>
    }
}
