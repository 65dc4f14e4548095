use jpocr_core::OcrError;
use jpocr_types::RecognitionLevel;
use objc2::AnyThread;
use objc2::rc::autoreleasepool;
use objc2_foundation::{NSArray, NSData, NSDictionary, NSString};
use objc2_vision::{
    VNImageRequestHandler, VNRecognizeTextRequest, VNRequest, VNRequestTextRecognitionLevel,
};

use crate::ocr::RecognitionOptions;

/// Run a `VNRecognizeTextRequest` over PNG bytes and collect the top candidate of
/// every observation. `performRequests` returns once the request has completed.
pub(crate) fn recognize_png(
    png: &[u8],
    options: &RecognitionOptions,
) -> Result<Vec<String>, OcrError> {
    autoreleasepool(|_| unsafe {
        let request = VNRecognizeTextRequest::new();
        request.setRecognitionLevel(match options.level {
            RecognitionLevel::Accurate => VNRequestTextRecognitionLevel::Accurate,
            RecognitionLevel::Fast => VNRequestTextRecognitionLevel::Fast,
        });
        request.setUsesLanguageCorrection(options.language_correction);
        let languages = NSArray::from_retained_slice(&[NSString::from_str(&options.language)]);
        request.setRecognitionLanguages(&languages);

        let data = NSData::with_bytes(png);
        let handler = VNImageRequestHandler::initWithData_options(
            VNImageRequestHandler::alloc(),
            &data,
            &NSDictionary::new(),
        );

        let base: &VNRequest = &request;
        handler
            .performRequests_error(&NSArray::from_slice(&[base]))
            .map_err(|e| OcrError::Service(e.localizedDescription().to_string()))?;

        let Some(observations) = request.results() else {
            return Ok(Vec::new());
        };

        Ok(observations
            .iter()
            .filter_map(|observation| {
                observation
                    .topCandidates(1)
                    .firstObject()
                    .map(|candidate| candidate.string().to_string())
            })
            .collect())
    })
}
